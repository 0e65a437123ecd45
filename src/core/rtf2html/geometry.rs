//! Cell geometry
//!
//! RTF describes a row's cells by their right boundaries (`\cellxN`), each
//! measured in twips from the row's left edge. A cell's width is the distance
//! from the previous boundary of the same row (or from 0 for the first one).

use std::fmt;

use crate::data::{INCH_PRECISION, TWIPS_PER_INCH};

/// A non-negative length in inches, rounded to three decimals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Inches(f64);

impl Inches {
    /// Convert a twips distance. The sign is dropped.
    ///
    /// Rounding works on the exact value of the quotient, so a quotient
    /// stored just below a decimal tie rounds down (54 twips is `0.037`).
    pub fn from_twips(twips: i64) -> Self {
        let exact = twips as f64 / TWIPS_PER_INCH;
        let precision = INCH_PRECISION as usize;
        let rounded = format!("{:.*}", precision, exact)
            .parse::<f64>()
            .unwrap_or(exact);
        Inches(rounded.abs())
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Whole values keep one decimal (`1.0`), others print their shortest form (`0.333`).
impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Width of one cell as resolved from its boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWidth {
    pub width: Inches,
    /// The boundary lay left of the previous one; the width was taken as absolute
    pub negative: bool,
}

/// Tracks the last cell boundary of the current row
#[derive(Debug, Clone, Default)]
pub struct RowGeometry {
    last_boundary: Option<i32>,
}

impl RowGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the width of the cell whose right edge is at `boundary`, then
    /// make `boundary` the left edge of the next cell.
    pub fn resolve(&mut self, boundary: i32) -> ResolvedWidth {
        let offset = self.last_boundary.unwrap_or(0);
        let delta = i64::from(boundary) - i64::from(offset);
        self.last_boundary = Some(boundary);
        ResolvedWidth {
            width: Inches::from_twips(delta),
            negative: delta < 0,
        }
    }

    /// Forget the previous boundary (new row)
    pub fn reset(&mut self) {
        self.last_boundary = None;
    }
}
