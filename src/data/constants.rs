//! Constants for RTF table reconstruction

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Twips per inch. RTF geometry parameters are given in twips.
pub const TWIPS_PER_INCH: f64 = 1440.0;

/// Decimal places kept when converting twips to inches.
pub const INCH_PRECISION: i32 = 3;

/// Group name assigned by the tokenizer to groups that do not start with a control word.
pub const UNKNOWN_GROUP: &str = "unknown";

/// Default class put on tables whose row carries `\trhdr`.
pub const DEFAULT_HEADER_CLASS: &str = "header_row";

/// Default number of non-breaking spaces emitted for `\tab`.
pub const DEFAULT_TAB_WIDTH: usize = 4;

lazy_static! {
    /// Groups the walker descends into. Everything else (font tables,
    /// stylesheets, pictures, info blocks) is skipped with its whole subtree.
    pub static ref STRUCTURAL_GROUPS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert(UNKNOWN_GROUP);
        // Row definitions and in-table paragraphs
        s.insert("trowd");
        s.insert("intbl");
        s.insert("row");
        s.insert("cell");
        // Fields
        s.insert("field");
        s.insert("fldinst");
        // Text runs
        s.insert("animtext");
        s.insert("line");
        s
    };
}

/// Whether a group with this name is structurally relevant to tables.
pub fn is_structural_group(name: &str) -> bool {
    STRUCTURAL_GROUPS.contains(name)
}
