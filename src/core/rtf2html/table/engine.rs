//! State-aware table reconstruction engine
//!
//! Turns the directive/text stream of an RTF document into row and cell
//! events for a [`FragmentSink`].
//!
//! A cell resolves its style exactly once, at one of two moments:
//! - on the first text run while no cell is open (the cell opens with the
//!   style of the next pending [`CellRecord`] plus the current alignment);
//! - on `\cell` if no text opened it, in which case an empty cell is emitted,
//!   styled only when a width was declared for it.
//!
//! Alignment is not part of the per-cell records: the last `\ql`/`\qr`/`\qc`
//! applies to every cell opened afterwards until `\pard` clears it.

use log::{debug, trace, warn};

use super::layout::{CellRecord, RowLayout};
use super::style::{Alignment, CellStyle};
use crate::core::rtf2html::directive::Directive;
use crate::core::rtf2html::sink::{FragmentSink, Inline};
use crate::data::translate_symbol;
use crate::utils::error::{RenderWarning, WarningKind};

/// Where the current cell stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No cell open; the next text run opens one
    NoCellOpen,
    /// A cell was opened by text and takes further content until `\cell`
    ContentOpen,
}

/// Table engine over an output sink
pub struct TableEngine<S: FragmentSink> {
    sink: S,
    tab_width: usize,
    layout: RowLayout,
    align: Option<Alignment>,
    cell: CellState,
    /// Row has been opened in the sink
    row_open: bool,
    /// `\trhdr` seen for the current row
    header: bool,
    /// Content waiting for the next cell to open
    held: Vec<Inline>,
    warnings: Vec<RenderWarning>,
}

impl<S: FragmentSink> TableEngine<S> {
    pub fn new(sink: S, tab_width: usize) -> Self {
        TableEngine {
            sink,
            tab_width,
            layout: RowLayout::new(),
            align: None,
            cell: CellState::NoCellOpen,
            row_open: false,
            header: false,
            held: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn cell_state(&self) -> CellState {
        self.cell
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.align
    }

    /// Cell records of the current row not yet taken by a cell
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = RenderWarning::new(kind, message);
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Apply one directive
    pub fn apply(&mut self, directive: Directive) {
        trace!("directive {:?}", directive);
        match directive {
            Directive::RowStart => {
                // A `\trhdr` seen while no row is open belongs to the row starting here
                let pending_header = self.header && !self.row_open;
                self.end_row();
                self.layout.reset();
                self.header = pending_header;
            }
            Directive::RowEnd => self.end_row(),
            Directive::Tab => self.inline(Inline::Text("\u{00a0}".repeat(self.tab_width))),
            Directive::LineBreak | Directive::ParagraphBreak => self.inline(Inline::LineBreak),
            Directive::ParagraphReset => self.align = None,
            Directive::CellRightEdge(boundary) => {
                let resolved = self.layout.push_width(boundary);
                if resolved.negative {
                    self.warn(
                        WarningKind::NegativeGeometry,
                        format!(
                            "cell boundary {} lies left of the previous one; using width {}in",
                            boundary, resolved.width
                        ),
                    );
                }
            }
            Directive::LeftIndent(twips) => self.layout.push_indent(twips),
            Directive::Align(align) => self.align = Some(align),
            Directive::Border(side) => self.layout.push_border(side),
            Directive::RowHeader => {
                self.header = true;
                if self.row_open {
                    self.sink.mark_header();
                }
            }
            Directive::CellEnd => self.end_cell(),
        }
    }

    /// Feed a plain text run
    pub fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.cell == CellState::NoCellOpen {
            self.open_content_cell();
        }
        self.sink.append(&Inline::Text(text.to_string()));
    }

    /// Feed a control symbol
    pub fn symbol(&mut self, symbol: char) {
        match translate_symbol(symbol) {
            None => self.warn(
                WarningKind::IgnorableSymbol,
                "found an ignorable control symbol that does not start a group",
            ),
            Some(text) if text.is_empty() => {}
            Some(text) => self.inline(Inline::Text(text)),
        }
    }

    /// Content that goes into the open cell, or waits for the next one
    fn inline(&mut self, fragment: Inline) {
        match self.cell {
            CellState::ContentOpen => self.sink.append(&fragment),
            CellState::NoCellOpen => self.held.push(fragment),
        }
    }

    fn ensure_row(&mut self) {
        if self.row_open {
            return;
        }
        self.sink.open_row();
        if self.header {
            self.sink.mark_header();
        }
        self.row_open = true;
    }

    fn flush_held(&mut self) {
        for fragment in std::mem::take(&mut self.held) {
            self.sink.append(&fragment);
        }
    }

    fn open_content_cell(&mut self) {
        self.ensure_row();
        let CellRecord {
            width,
            indent,
            borders,
        } = self.layout.take_next();
        let style = CellStyle {
            width,
            indent,
            align: self.align,
            borders,
        };
        debug!("opening cell with style {:?}", style.to_css());
        self.sink.open_cell(Some(&style));
        self.flush_held();
        self.cell = CellState::ContentOpen;
    }

    fn end_cell(&mut self) {
        match self.cell {
            CellState::ContentOpen => {
                self.sink.close_cell();
                self.cell = CellState::NoCellOpen;
            }
            CellState::NoCellOpen => {
                self.ensure_row();
                let record = self.layout.take_next();
                let style = record.width.map(|width| CellStyle {
                    width: Some(width),
                    indent: None,
                    align: None,
                    borders: record.borders,
                });
                debug!("empty cell, style {:?}", style.as_ref().map(CellStyle::to_css));
                self.sink.open_cell(style.as_ref());
                self.flush_held();
                self.sink.close_cell();
            }
        }
    }

    fn discard_held(&mut self) {
        if self.held.is_empty() {
            return;
        }
        let count = self.held.len();
        self.held.clear();
        self.warn(
            WarningKind::DiscardedContent,
            format!("{} fragment(s) outside any cell dropped", count),
        );
    }

    fn end_row(&mut self) {
        if self.cell == CellState::ContentOpen {
            self.warn(WarningKind::UnterminatedCell, "row ended inside an open cell");
            self.sink.close_cell();
            self.cell = CellState::NoCellOpen;
        }
        self.discard_held();
        if self.row_open {
            self.sink.close_row();
            self.row_open = false;
        }
        self.header = false;
    }

    /// Close whatever is still open and hand back the sink output
    pub fn finish(mut self) -> (S::Output, Vec<RenderWarning>) {
        if self.cell == CellState::ContentOpen {
            self.warn(WarningKind::UnterminatedCell, "document ended inside an open cell");
            self.sink.close_cell();
            self.cell = CellState::NoCellOpen;
        }
        self.discard_held();
        if self.row_open {
            self.warn(WarningKind::UnterminatedRow, "document ended inside an open row");
            self.sink.close_row();
            self.row_open = false;
        }
        (self.sink.finish(), self.warnings)
    }
}
