//! Warning and error types for rtftab
//!
//! Rendering never fails: every anomaly in the input degrades to best-effort
//! markup and is reported as a [`RenderWarning`]. The only fallible operation
//! is loading an input tree from JSON (feature `data-loading`).

use std::fmt;

/// Category of a non-fatal rendering issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningKind {
    /// `\*` found somewhere other than right after a group start
    IgnorableSymbol,
    /// Text-like fragments with no cell to go into were dropped
    DiscardedContent,
    /// The pass ended with a cell still open
    UnterminatedCell,
    /// The pass ended with a row still open
    UnterminatedRow,
    /// A cell boundary lies left of the previous one
    NegativeGeometry,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::IgnorableSymbol => write!(f, "ignorable-symbol"),
            WarningKind::DiscardedContent => write!(f, "discarded-content"),
            WarningKind::UnterminatedCell => write!(f, "unterminated-cell"),
            WarningKind::UnterminatedRow => write!(f, "unterminated-row"),
            WarningKind::NegativeGeometry => write!(f, "negative-geometry"),
        }
    }
}

/// Rendering warning (non-fatal issue)
#[derive(Debug, Clone, PartialEq)]
pub struct RenderWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl RenderWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning [{}]: {}", self.kind, self.message)
    }
}

/// Render output with the warnings collected along the way
#[derive(Debug, Clone)]
pub struct RenderOutput<T> {
    /// The rendered content
    pub output: T,
    /// Any warnings generated during rendering
    pub warnings: Vec<RenderWarning>,
}

impl<T> RenderOutput<T> {
    pub fn new(output: T) -> Self {
        Self {
            output,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(output: T, warnings: Vec<RenderWarning>) -> Self {
        Self { output, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Drop the warnings and keep the output
    pub fn into_output(self) -> T {
        self.output
    }
}

/// Error loading an input tree
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Input is not valid JSON or does not match the tree shape
    InvalidInput {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InvalidInput {
                message,
                line,
                column,
            } => {
                if let (Some(l), Some(c)) = (line, column) {
                    write!(f, "Invalid input at line {}, column {}: {}", l, c, message)
                } else {
                    write!(f, "Invalid input: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(feature = "data-loading")]
impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = if err.line() == 0 {
            (None, None)
        } else {
            (Some(err.line()), Some(err.column()))
        };
        LoadError::InvalidInput {
            message: err.to_string(),
            line,
            column,
        }
    }
}

impl LoadError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LoadError::InvalidInput {
            message: message.into(),
            line: None,
            column: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = RenderWarning::new(WarningKind::IgnorableSymbol, "stray \\*");
        let msg = warning.to_string();
        assert!(msg.contains("ignorable-symbol"));
        assert!(msg.contains("stray"));
    }

    #[test]
    fn test_render_output() {
        let output = RenderOutput::new("<table></table>".to_string());
        assert!(!output.has_warnings());

        let output_with_warn = RenderOutput::with_warnings(
            String::new(),
            vec![RenderWarning::new(WarningKind::UnterminatedRow, "row left open")],
        );
        assert!(output_with_warn.has_warnings());
        assert_eq!(output_with_warn.into_output(), "");
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::InvalidInput {
            message: "expected value".to_string(),
            line: Some(3),
            column: Some(7),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("column 7"));

        assert_eq!(LoadError::invalid("empty").to_string(), "Invalid input: empty");
    }
}
