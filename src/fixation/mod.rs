//! Optimal Recognition Point and bionic fixation calculators.
//!
//! The slot thresholds and ratios below reproduce published eye-tracking
//! measurements (fixation 20–35% from the left edge). They are exact
//! product constants, not tunables.

use crate::classify::Classifier;


/// Letter positions recorded per scan. Positions past the cap cannot
/// shift the fixation for any realistic word and are ignored.
pub const ORP_SCAN_CAP: usize = 200;

/// ORP calculator with a reusable position buffer.
///
/// One scan records the char offsets of letter/digit characters, then
/// the fixation slot is picked from the empirical table. Reusing the
/// buffer keeps repeated calls allocation-free; the type is not meant
/// to be shared, give each worker its own instance.
#[derive(Debug, Default)]
pub struct OrpCalculator {
    classifier: Classifier,
    positions: heapless::Vec<usize, ORP_SCAN_CAP>,
}

impl OrpCalculator {
    pub fn new() -> Self {
        Self::with_classifier(Classifier::new())
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            classifier,
            positions: heapless::Vec::new(),
        }
    }

    pub fn classifier(&self) -> Classifier {
        self.classifier
    }

    /// Char offset of the fixation character in `word`.
    ///
    /// Punctuation does not count toward slot selection but does count
    /// toward the returned offset. Words without letters or digits
    /// fixate at offset zero.
    pub fn orp_index(&mut self, word: &str) -> usize {
        self.positions.clear();
        for (offset, ch) in word.chars().enumerate() {
            if self.classifier.is_letter_or_digit(ch) && self.positions.push(offset).is_err() {
                break;
            }
        }

        let letters = self.positions.len();
        if letters == 0 {
            return 0;
        }

        let slot = orp_slot(letters).min(letters - 1);
        self.positions[slot]
    }
}

/// Fixation slot for a word with `letters` letter/digit characters.
const fn orp_slot(letters: usize) -> usize {
    match letters {
        0..=2 => 0,
        3..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        // Long words fixate 27% in, floored.
        _ => letters * 27 / 100,
    }
}

/// One-shot [`OrpCalculator::orp_index`] with a fresh buffer.
pub fn orp_index(word: &str) -> usize {
    OrpCalculator::new().orp_index(word)
}

/// [`bionic_fixation_with`] under the default classifier.
pub fn bionic_fixation(word: &str) -> usize {
    bionic_fixation_with(Classifier::new(), word)
}

/// Char offset one past the last bold character for bionic rendering.
///
/// Words of up to two letters bold entirely; longer words bold a fixed
/// fraction of their letters. Words without letters or digits return
/// zero, so nothing is bolded.
pub fn bionic_fixation_with(classifier: Classifier, word: &str) -> usize {
    let letters = word
        .chars()
        .filter(|&ch| classifier.is_letter_or_digit(ch))
        .count();
    if letters == 0 {
        return 0;
    }

    let bold = bionic_bold_count(letters);
    let mut seen = 0usize;
    for (offset, ch) in word.chars().enumerate() {
        if classifier.is_letter_or_digit(ch) {
            seen += 1;
            if seen == bold {
                return offset + 1;
            }
        }
    }

    word.chars().count()
}

/// Bold-character count for a word with `letters` letter/digit characters.
const fn bionic_bold_count(letters: usize) -> usize {
    match letters {
        0..=2 => letters,
        3 => 2,
        4..=6 => (letters * 50).div_ceil(100),
        7..=10 => (letters * 45).div_ceil(100),
        _ => (letters * 40).div_ceil(100),
    }
}
