//! Output sinks
//!
//! The table engine produces a stream of row/cell events; a
//! [`FragmentSink`] turns them into output. Two sinks exist: [`MarkupSink`]
//! concatenates HTML text, [`TreeSink`] builds an [`HtmlDocument`]. The
//! engine guarantees the call order:
//!
//! ```text
//! (open_row mark_header? (open_cell append* close_cell)+ close_row)*
//! ```
//!
//! `mark_header` may also arrive between cells of an open row.

mod markup;
mod tree;

pub use markup::{escape_attr, escape_text, MarkupSink};
pub use tree::{HtmlDocument, HtmlElement, HtmlNode, Tag, TreeSink};

use super::table::CellStyle;

/// A piece of cell content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    LineBreak,
}

/// Receiver of table structure events
pub trait FragmentSink {
    type Output;

    /// Open a table with a single row
    fn open_row(&mut self);
    /// Flag the open table as a header row
    fn mark_header(&mut self);
    /// Open a cell; `None` for an unstyled cell
    fn open_cell(&mut self, style: Option<&CellStyle>);
    /// Append content to the open cell
    fn append(&mut self, fragment: &Inline);
    fn close_cell(&mut self);
    fn close_row(&mut self);
    fn finish(self) -> Self::Output;
}
