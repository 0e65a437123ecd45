//! Cell style descriptor and its CSS form

use crate::core::rtf2html::geometry::Inches;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Convert to CSS `text-align` value
    pub fn to_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }
}

/// One side of a cell border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl BorderSide {
    /// All sides in CSS shorthand order
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Top,
        BorderSide::Right,
        BorderSide::Bottom,
        BorderSide::Left,
    ];

    fn index(self) -> usize {
        match self {
            BorderSide::Top => 0,
            BorderSide::Right => 1,
            BorderSide::Bottom => 2,
            BorderSide::Left => 3,
        }
    }
}

/// Which sides of a cell have a border declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Borders([bool; 4]);

impl Borders {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has(&self, side: BorderSide) -> bool {
        self.0[side.index()]
    }

    pub fn set(&mut self, side: BorderSide) {
        self.0[side.index()] = true;
    }

    /// Width of one side in pixels: 1 when declared, 0 otherwise
    pub fn width_px(&self, side: BorderSide) -> u32 {
        u32::from(self.has(side))
    }

    /// `border-width: T R B L;` with every side present
    pub fn to_css(&self) -> String {
        let widths: Vec<String> = BorderSide::ALL
            .iter()
            .map(|&side| format!("{}px", self.width_px(side)))
            .collect();
        format!("border-width: {};", widths.join(" "))
    }
}

/// Resolved style of one cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    pub width: Option<Inches>,
    pub indent: Option<Inches>,
    pub align: Option<Alignment>,
    pub borders: Borders,
}

impl CellStyle {
    /// Inline CSS declarations in fixed order: width, indent, alignment, borders.
    /// Border widths are always present.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(width) = self.width {
            css.push_str(&format!("min-width: {}in; max-width: {}in; ", width, width));
        }
        if let Some(indent) = self.indent {
            css.push_str(&format!("text-indent: {}in; ", indent));
        }
        if let Some(align) = self.align {
            css.push_str(&format!("text-align: {}; ", align.to_css()));
        }
        css.push_str(&self.borders.to_css());
        css
    }
}
