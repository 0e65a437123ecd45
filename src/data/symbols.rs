//! Control symbol translations
//!
//! RTF control symbols are single-character escapes (`\~`, `\_`, `\|`, ...).
//! Most of them have a fixed meaning; anything not listed here is passed
//! through as-is, which covers characters produced from `\'hh` hex escapes.

use phf::phf_map;

/// Symbol character to rendered text.
///
/// An empty replacement deletes the symbol from the output.
pub static CONTROL_SYMBOLS: phf::Map<char, &'static str> = phf_map! {
    // Formula character (Word 5.1 for Macintosh), obsolete
    '|' => "",
    // Optional hyphen
    '-' => "",
    // Index subentry separator
    ':' => "",
    // Non-breaking space
    '~' => "\u{00a0}",
    // Non-breaking hyphen
    '_' => "\u{2011}",
};

/// The ignorable-destination marker. Only meaningful right after a group start.
pub const IGNORABLE_MARKER: char = '*';

/// Translate a control symbol.
///
/// Returns `None` for the ignorable marker, which has no textual rendering.
pub fn translate_symbol(symbol: char) -> Option<String> {
    if symbol == IGNORABLE_MARKER {
        return None;
    }
    match CONTROL_SYMBOLS.get(&symbol) {
        Some(text) => Some((*text).to_string()),
        None => Some(symbol.to_string()),
    }
}
