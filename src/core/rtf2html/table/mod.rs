//! RTF table reconstruction
//!
//! Turns row/cell directives and text runs into nested table structures.
//!
//! # Architecture
//!
//! ```text
//! Directives -> RowLayout (pending cell records) -> TableEngine (cell lifecycle) -> FragmentSink
//! ```
//!
//! # Example
//!
//! ```ignore
//! use table::TableEngine;
//!
//! let mut engine = TableEngine::new(MarkupSink::new(false, "header_row"), 4);
//! engine.apply(Directive::RowStart);
//! engine.apply(Directive::CellRightEdge(1440));
//! engine.text("Hi");
//! engine.apply(Directive::CellEnd);
//! engine.apply(Directive::RowEnd);
//! let (html, warnings) = engine.finish();
//! ```

mod engine;
mod layout;
mod style;

#[cfg(test)]
mod tests;

// Re-export public API
pub use engine::{CellState, TableEngine};
pub use layout::{CellRecord, RowLayout};
pub use style::{Alignment, BorderSide, Borders, CellStyle};
