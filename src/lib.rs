//! # rtftab
//!
//! Rebuilds HTML tables from parsed RTF documents.
//!
//! ## Features
//!
//! - **Table Reconstruction**: `\trowd` / `\cellx` / `\cell` / `\row` streams become
//!   `<table><tr><td><pre>` structures
//! - **Cell Geometry**: widths from cumulative `\cellx` boundaries (twips → inches)
//! - **Cell Style**: left indent, alignment and per-side borders as inline CSS
//! - **Two Outputs**: an HTML string or a structured node tree, from one engine
//! - **Scoped Rendering**: restrict rendering to the subtree of a named group
//! - **Never Fails**: malformed input degrades to best-effort markup plus warnings
//!
//! The RTF tokenizer is not part of this crate; input is the already parsed
//! [`Group`] tree.
//!
//! ## Usage Example
//!
//! ```rust
//! use rtftab::{render_table_html_with_options, Entity, Group, R2HOptions};
//!
//! let root = Group::new("rtf1").with_children(vec![
//!     Entity::word("trowd"),
//!     Entity::word_with("cellx", 1440),
//!     Entity::word("ql"),
//!     Entity::text("Hi"),
//!     Entity::word("cell"),
//!     Entity::word("row"),
//! ]);
//!
//! let html = render_table_html_with_options(&root, &R2HOptions::compact());
//! assert_eq!(
//!     html,
//!     "<table><tr><td style=\"min-width: 1.0in; max-width: 1.0in; text-align: left; \
//!      border-width: 0px 0px 0px 0px;\"><pre>Hi</pre></td></tr></table>"
//! );
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core types and functions
pub use crate::core::entities::{ControlSymbol, ControlWord, Entity, Group, PlainText};
pub use crate::core::rtf2html;
pub use crate::core::rtf2html::{
    render_html_with_diagnostics, render_table_html, render_table_html_with_options,
    render_table_tree, render_table_tree_with_options, render_tree_with_diagnostics,
    render_with_sink, Alignment, BorderSide, CellStyle, Directive, FragmentSink, HtmlDocument,
    HtmlElement, HtmlNode, Inline, MarkupSink, R2HOptions, Scope, Tag, TreeSink,
};

#[cfg(feature = "data-loading")]
pub use crate::core::entities::load_tree_json;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{LoadError, RenderOutput, RenderWarning, WarningKind};
