//! Frozen segmentation and display policies.

use crate::segment;

pub const CHUNK_MIN_WORDS: usize = 1;
pub const CHUNK_MAX_WORDS: usize = 3;
pub const CONTEXT_WINDOW_WORDS: usize = 8;
pub const LONG_WORD_CHARS: usize = 8;
pub const MIN_TEXT_WORDS: usize = 10;
pub const DEFAULT_WPM: u32 = 300;

/// Bounds for how many words may share one display chunk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChunkPolicy {
    pub min_words: usize,
    pub max_words: usize,
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self {
            min_words: CHUNK_MIN_WORDS,
            max_words: CHUNK_MAX_WORDS,
        }
    }
}

impl ChunkPolicy {
    pub fn clamp_size(self, requested: usize) -> usize {
        requested.max(self.min_words).min(self.max_words)
    }
}

/// Minimum document size worth starting a reading session for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextPolicy {
    pub min_words: usize,
}

impl Default for TextPolicy {
    fn default() -> Self {
        Self {
            min_words: MIN_TEXT_WORDS,
        }
    }
}

/// Whether `text` has enough words to be readable under `policy`.
pub fn validate_text(text: &str, policy: TextPolicy) -> bool {
    segment::count_words(text) >= policy.min_words
}
