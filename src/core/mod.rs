//! Core rendering modules
//!
//! This module contains the document tree and the rendering engine:
//! - `entities`: the parsed RTF tree handed over by the tokenizer
//! - `rtf2html`: RTF table to HTML renderer

pub mod entities;
pub mod rtf2html;

// Re-export main types and functions
pub use entities::{ControlSymbol, ControlWord, Entity, Group, PlainText};
pub use rtf2html::{
    render_html_with_diagnostics, render_table_html, render_table_html_with_options,
    render_table_tree, render_table_tree_with_options, render_tree_with_diagnostics,
    render_with_sink, R2HOptions,
};
