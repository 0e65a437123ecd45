//! Render options

use crate::data::{DEFAULT_HEADER_CLASS, DEFAULT_TAB_WIDTH};

// =============================================================================
// RTF → HTML Render Options
// =============================================================================

/// Options for RTF table rendering
#[derive(Debug, Clone, PartialEq)]
pub struct R2HOptions {
    /// Only render the subtrees of groups with this name
    /// Default: None (whole document)
    pub scope: Option<String>,

    /// Put each table and each cell on its own indented line
    /// Default: true
    pub pretty: bool,

    /// Class given to tables whose row carries `\trhdr`
    /// Default: "header_row"
    pub header_class: String,

    /// Number of non-breaking spaces a `\tab` expands to
    /// Default: 4
    pub tab_width: usize,
}

impl Default for R2HOptions {
    fn default() -> Self {
        Self {
            scope: None,
            pretty: true,
            header_class: DEFAULT_HEADER_CLASS.to_string(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl R2HOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup without line breaks or indentation
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    /// Restrict rendering to groups named `name`
    pub fn scoped(name: impl Into<String>) -> Self {
        Self {
            scope: Some(name.into()),
            ..Self::default()
        }
    }

    /// Same options, restricted to groups named `name`
    pub fn with_scope(mut self, name: impl Into<String>) -> Self {
        self.scope = Some(name.into());
        self
    }
}
