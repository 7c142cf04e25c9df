//! Letter/digit classification for fixation positioning.
//!
//! Runs once per character over the whole document during precomputation,
//! so the common case has to resolve without table lookups: ASCII first,
//! then the Latin range most Western-European text falls into, and only
//! then the wide Unicode tables.

/// How code points above U+024F are classified.
///
/// `Full` uses the compiler's Unicode alphanumeric tables. `ScriptRanges`
/// is the reduced allow-list for targets that cannot carry them; it is
/// selected once at construction, never probed per call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnicodeTables {
    #[default]
    Full,
    ScriptRanges,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Classifier {
    tables: UnicodeTables,
}

/// Script blocks classified as letters when full tables are unavailable.
const SCRIPT_RANGES: [(u32, u32); 6] = [
    (0x0370, 0x03FF), // Greek
    (0x0400, 0x04FF), // Cyrillic
    (0x3040, 0x309F), // Hiragana
    (0x30A0, 0x30FF), // Katakana
    (0x4E00, 0x9FFF), // CJK Unified
    (0xAC00, 0xD7AF), // Hangul
];

impl Classifier {
    pub const fn new() -> Self {
        Self {
            tables: UnicodeTables::Full,
        }
    }

    pub const fn with_tables(tables: UnicodeTables) -> Self {
        Self { tables }
    }

    /// Whether `ch` counts as a letter or digit for fixation purposes.
    pub fn is_letter_or_digit(self, ch: char) -> bool {
        if ch.is_ascii() {
            return ch.is_ascii_alphanumeric();
        }

        let code = ch as u32;
        if code < 0x00C0 {
            // Latin-1 punctuation and signs.
            return false;
        }
        if code <= 0x024F {
            return ch != '\u{00D7}' && ch != '\u{00F7}';
        }

        match self.tables {
            UnicodeTables::Full => ch.is_alphanumeric(),
            UnicodeTables::ScriptRanges => SCRIPT_RANGES
                .iter()
                .any(|&(low, high)| (low..=high).contains(&code)),
        }
    }
}
