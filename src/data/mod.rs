//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for RTF → HTML table rendering:
//! - Control symbol translations
//! - The structural group allow-list
//! - Unit and output constants

pub mod constants;
pub mod symbols;

// Re-export commonly used items
pub use constants::{
    is_structural_group, DEFAULT_HEADER_CLASS, DEFAULT_TAB_WIDTH, INCH_PRECISION,
    STRUCTURAL_GROUPS, TWIPS_PER_INCH, UNKNOWN_GROUP,
};
pub use symbols::{translate_symbol, CONTROL_SYMBOLS, IGNORABLE_MARKER};
