//! Pending cell styles of the current row
//!
//! RTF emits a row's cell definitions (`\cellx`, `\clbrdr*`) as a prefix
//! before any of the row's content, so the Nth definition of each kind
//! belongs to the Nth cell. [`RowLayout`] keeps one [`CellRecord`] per cell
//! and fills each field kind independently: a directive writes into the
//! first record whose field of that kind is still free and that has not been
//! handed out yet. Cells take records by index, one per cell, in order.

use crate::core::rtf2html::geometry::{Inches, ResolvedWidth, RowGeometry};

use super::style::{BorderSide, Borders};

/// Style properties declared for one cell ahead of its content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellRecord {
    pub width: Option<Inches>,
    pub indent: Option<Inches>,
    pub borders: Borders,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Width,
    Indent,
    Border(BorderSide),
}

impl Field {
    fn cursor(self) -> usize {
        match self {
            Field::Width => 0,
            Field::Indent => 1,
            Field::Border(BorderSide::Top) => 2,
            Field::Border(BorderSide::Right) => 3,
            Field::Border(BorderSide::Bottom) => 4,
            Field::Border(BorderSide::Left) => 5,
        }
    }
}

/// Per-row list of cell records
#[derive(Debug, Clone, Default)]
pub struct RowLayout {
    records: Vec<CellRecord>,
    /// Next free record index, per field kind
    cursors: [usize; 6],
    /// Number of records handed out to cells
    consumed: usize,
    geometry: RowGeometry,
}

impl RowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over for a new row
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, field: Field) -> &mut CellRecord {
        let cursor = &mut self.cursors[field.cursor()];
        let index = (*cursor).max(self.consumed);
        *cursor = index + 1;
        if self.records.len() <= index {
            self.records.resize_with(index + 1, CellRecord::default);
        }
        &mut self.records[index]
    }

    /// Record a `\cellx` boundary and the width it implies
    pub fn push_width(&mut self, boundary: i32) -> ResolvedWidth {
        let resolved = self.geometry.resolve(boundary);
        self.slot(Field::Width).width = Some(resolved.width);
        resolved
    }

    /// Record a `\li` indent
    pub fn push_indent(&mut self, twips: i32) {
        self.slot(Field::Indent).indent = Some(Inches::from_twips(i64::from(twips)));
    }

    /// Record a border marker for one side
    pub fn push_border(&mut self, side: BorderSide) {
        self.slot(Field::Border(side)).borders.set(side);
    }

    /// Hand out the record of the next cell. Cells beyond the declared ones
    /// get an empty record (no width, no indent, no borders).
    pub fn take_next(&mut self) -> CellRecord {
        let record = self
            .records
            .get(self.consumed)
            .cloned()
            .unwrap_or_default();
        self.consumed += 1;
        record
    }

    /// Records declared but not yet handed out
    pub fn pending(&self) -> &[CellRecord] {
        self.records.get(self.consumed..).unwrap_or(&[])
    }

    /// Border markers of one side waiting for a cell
    pub fn queued_borders(&self, side: BorderSide) -> usize {
        self.pending().iter().filter(|r| r.borders.has(side)).count()
    }

    /// Widths waiting for a cell
    pub fn queued_widths(&self) -> usize {
        self.pending().iter().filter(|r| r.width.is_some()).count()
    }
}
