//! Table-relevant RTF control words
//!
//! Control words are classified once into a closed [`Directive`] enum; the
//! engine then dispatches on it with a single exhaustive match. Control
//! words outside this vocabulary (fonts, colors, character formatting, ...)
//! map to `None` and have no effect.

use crate::core::entities::ControlWord;

use super::table::{Alignment, BorderSide};

/// A control word the table engine acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `\trowd`: start of a row definition
    RowStart,
    /// `\row`: end of a row
    RowEnd,
    /// `\tab`
    Tab,
    /// `\line`
    LineBreak,
    /// `\par`
    ParagraphBreak,
    /// `\pard`: reset paragraph properties
    ParagraphReset,
    /// `\cellxN`: right boundary of the next cell, in twips from the row's left edge
    CellRightEdge(i32),
    /// `\liN`: left indent in twips
    LeftIndent(i32),
    /// `\ql`, `\qr`, `\qc`
    Align(Alignment),
    /// `\clbrdrt`, `\clbrdrr`, `\clbrdrb`, `\clbrdrl`
    Border(BorderSide),
    /// `\trhdr`: row repeats as a header on each page
    RowHeader,
    /// `\cell`: end of a cell
    CellEnd,
}

impl Directive {
    /// Classify a control word. A missing numeric parameter reads as 0.
    pub fn from_control_word(word: &ControlWord) -> Option<Self> {
        let parameter = word.parameter.unwrap_or(0);
        let directive = match word.control_name.as_str() {
            "trowd" => Directive::RowStart,
            "row" => Directive::RowEnd,
            "tab" => Directive::Tab,
            "line" => Directive::LineBreak,
            "par" => Directive::ParagraphBreak,
            "pard" => Directive::ParagraphReset,
            "cellx" => Directive::CellRightEdge(parameter),
            "li" => Directive::LeftIndent(parameter),
            "ql" => Directive::Align(Alignment::Left),
            "qr" => Directive::Align(Alignment::Right),
            "qc" => Directive::Align(Alignment::Center),
            "clbrdrt" => Directive::Border(BorderSide::Top),
            "clbrdrr" => Directive::Border(BorderSide::Right),
            "clbrdrb" => Directive::Border(BorderSide::Bottom),
            "clbrdrl" => Directive::Border(BorderSide::Left),
            "trhdr" => Directive::RowHeader,
            "cell" => Directive::CellEnd,
            _ => return None,
        };
        Some(directive)
    }
}
