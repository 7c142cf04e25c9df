//! Whitespace normalization, tokenization, chunk grouping, and context
//! windows over tokenized text.

use alloc::string::String;
use alloc::vec::Vec;

use crate::policy::{CONTEXT_WINDOW_WORDS, ChunkPolicy};

#[cfg(test)]
mod tests;

/// Zero-width code points that can invisibly split or fuse words.
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

fn is_zero_width(ch: char) -> bool {
    ZERO_WIDTH.contains(&ch)
}

/// Split `text` into reading-order words.
///
/// Zero-width characters are dropped, line breaks and whitespace runs
/// collapse to single separators, and ends are trimmed. Empty or
/// whitespace-only input yields an empty list.
pub fn parse_text(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if is_zero_width(ch) {
            continue;
        }
        if ch.is_whitespace() {
            if !current.is_empty() {
                words.push(core::mem::take(&mut current));
            }
            continue;
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Count words without materializing the token list.
pub fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut in_word = false;

    for ch in text.chars() {
        if is_zero_width(ch) {
            continue;
        }
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }

    count
}

/// [`chunk_words_with`] under the default chunk policy.
pub fn chunk_words(words: &[String], chunk_size: usize) -> Vec<String> {
    chunk_words_with(words, chunk_size, ChunkPolicy::default())
}

/// Group words into display chunks of `chunk_size` words each.
///
/// The size is clamped by `policy`; a clamped size of one returns the
/// word list unchanged. Grouping is greedy left to right, so only the
/// final chunk may be short. Chunk text is built by direct concatenation
/// into one buffer per chunk.
pub fn chunk_words_with(words: &[String], chunk_size: usize, policy: ChunkPolicy) -> Vec<String> {
    let size = policy.clamp_size(chunk_size);
    if size <= 1 {
        return words.to_vec();
    }

    let mut chunks = Vec::with_capacity(words.len().div_ceil(size));
    for group in words.chunks(size) {
        chunks.push(join_words(group));
    }
    chunks
}

fn join_words(words: &[String]) -> String {
    let bytes = words.iter().map(|word| word.len() + 1).sum::<usize>();
    let mut text = String::with_capacity(bytes.saturating_sub(1));
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(word);
    }
    text
}

/// Sliding window of display context around one word.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordContext {
    pub before: String,
    pub current: String,
    pub after: String,
}

/// [`word_context_windowed`] with the default window size.
pub fn word_context(words: &[String], index: usize) -> WordContext {
    word_context_windowed(words, index, CONTEXT_WINDOW_WORDS)
}

/// Up to `window` words on either side of `index`, joined by spaces.
///
/// The index is clamped into range and out-of-range windows truncate
/// silently at the list boundaries.
pub fn word_context_windowed(words: &[String], index: usize, window: usize) -> WordContext {
    if words.is_empty() {
        return WordContext::default();
    }

    let index = index.min(words.len() - 1);
    let start = index.saturating_sub(window);
    let end = index.saturating_add(window).saturating_add(1).min(words.len());

    WordContext {
        before: join_words(&words[start..index]),
        current: words[index].clone(),
        after: join_words(&words[index + 1..end]),
    }
}
