//! Sentence and reading-time statistics over raw text.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::classify::Classifier;
use crate::policy::LONG_WORD_CHARS;
use crate::segment;

/// Abbreviations whose trailing dot does not end a sentence.
const ABBREVIATIONS: [&str; 14] = [
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Rev.", "Gen.", "vs.", "etc.",
    "e.g.", "i.e.",
];

const SENTENCE_TERMINALS: [char; 3] = ['.', '!', '?'];

/// Quote and bracket characters that may trail terminal punctuation.
const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '\u{2019}', '\u{201D}'];

/// Aggregate statistics for a text at a given reading speed.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    /// Letters and digits only; spaces and punctuation excluded.
    pub letter_count: usize,
    pub sentence_count: usize,
    pub average_word_length: f32,
    pub reading_time_ms: u64,
    /// `H:MM:SS` above an hour, `M:SS` otherwise.
    pub reading_time_label: String,
}

/// Word/letter counts and a reading-time estimate at `wpm`, clamped to
/// at least one word per minute.
pub fn text_stats(text: &str, wpm: u32) -> TextStats {
    let classifier = Classifier::new();
    let word_count = segment::count_words(text);
    let letter_count = text
        .chars()
        .filter(|&ch| classifier.is_letter_or_digit(ch))
        .count();
    let average_word_length = if word_count == 0 {
        0.0
    } else {
        letter_count as f32 / word_count as f32
    };

    let wpm = wpm.max(1);
    let reading_time_ms = (word_count as u64).saturating_mul(60_000) / u64::from(wpm);

    TextStats {
        word_count,
        letter_count,
        sentence_count: count_sentences(text),
        average_word_length,
        reading_time_ms,
        reading_time_label: format_reading_time(reading_time_ms),
    }
}

/// Count sentences by terminal punctuation runs, ignoring dots that
/// belong to common abbreviations and single-letter initials. Non-empty
/// text without terminal punctuation counts as one sentence.
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let mut count = 0usize;
    let mut in_terminal_run = false;
    for word in text.split_whitespace() {
        if is_abbreviation(word) {
            in_terminal_run = false;
            continue;
        }
        for ch in word.chars() {
            if SENTENCE_TERMINALS.contains(&ch) {
                if !in_terminal_run {
                    count += 1;
                    in_terminal_run = true;
                }
            } else {
                in_terminal_run = false;
            }
        }
    }

    count.max(1)
}

/// Split `text` into sentences; terminal punctuation stays attached.
pub fn extract_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        if is_sentence_end(word) && !is_abbreviation(word) {
            sentences.push(core::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Whether `word` ends a sentence, allowing closing quotes or brackets
/// after the terminal punctuation.
pub fn is_sentence_end(word: &str) -> bool {
    word.trim_end_matches(CLOSERS)
        .ends_with(SENTENCE_TERMINALS)
}

/// Whether `word` carries any punctuation character.
pub fn has_punctuation(word: &str) -> bool {
    let classifier = Classifier::new();
    word.chars()
        .any(|ch| !ch.is_whitespace() && !classifier.is_letter_or_digit(ch))
}

/// Long words get extra display time. The threshold counts letters, so
/// quoting or hyphenation does not tip a short word over it.
pub fn is_long_word(word: &str) -> bool {
    let classifier = Classifier::new();
    word.chars()
        .filter(|&ch| classifier.is_letter_or_digit(ch))
        .count()
        >= LONG_WORD_CHARS
}

/// `H:MM:SS` above an hour, `M:SS` otherwise.
pub fn format_reading_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    let mut label = String::new();
    if hours > 0 {
        let _ = write!(label, "{hours}:{minutes:02}:{seconds:02}");
    } else {
        let _ = write!(label, "{minutes}:{seconds:02}");
    }
    label
}

fn is_abbreviation(word: &str) -> bool {
    if ABBREVIATIONS
        .iter()
        .any(|abbreviation| word.eq_ignore_ascii_case(abbreviation))
    {
        return true;
    }

    // Single-letter initials like "J."
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some('.'), None) if first.is_alphabetic()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_WPM;
    use crate::segment::parse_text;

    #[test]
    fn counts_match_the_tokenizer() {
        let text = "Hello   world!\nNew line.";
        let stats = text_stats(text, DEFAULT_WPM);
        assert_eq!(stats.word_count, parse_text(text).len());
        assert_eq!(stats.letter_count, 17);
    }

    #[test]
    fn reading_time_scales_inversely_with_wpm() {
        let text = "one two three four five six";
        let slow = text_stats(text, 100);
        let fast = text_stats(text, 300);
        assert_eq!(slow.reading_time_ms, 3_600);
        assert_eq!(fast.reading_time_ms, 1_200);
        assert_eq!(slow.reading_time_ms, 3 * fast.reading_time_ms);
    }

    #[test]
    fn zero_wpm_clamps_instead_of_dividing_by_zero() {
        let stats = text_stats("one two", 0);
        assert_eq!(stats.reading_time_ms, 2 * 60_000);
        assert_eq!(stats.reading_time_label, "2:00");
    }

    #[test]
    fn empty_text_produces_zeroed_stats() {
        let stats = text_stats("", DEFAULT_WPM);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.letter_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.average_word_length, 0.0);
        assert_eq!(stats.reading_time_label, "0:00");
    }

    #[test]
    fn abbreviations_do_not_end_sentences() {
        assert_eq!(count_sentences("Dr. Smith went home. She left."), 2);
        assert_eq!(count_sentences("See J. R. Tolkien. Then read more."), 2);
        assert_eq!(count_sentences("Fruit, e.g. apples."), 1);
    }

    #[test]
    fn terminal_runs_count_once() {
        assert_eq!(count_sentences("What?! Really?!"), 2);
        assert_eq!(count_sentences("Wait... done."), 2);
    }

    #[test]
    fn unterminated_text_counts_as_one_sentence() {
        assert_eq!(count_sentences("no punctuation here"), 1);
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("   "), 0);
    }

    #[test]
    fn sentences_extract_with_their_punctuation() {
        assert_eq!(
            extract_sentences("One here. Two there! Three"),
            ["One here.".to_owned(), "Two there!".to_owned(), "Three".to_owned()]
        );
        assert_eq!(
            extract_sentences("Dr. Smith left. Done."),
            ["Dr. Smith left.".to_owned(), "Done.".to_owned()]
        );
    }

    #[test]
    fn sentence_end_allows_trailing_closers() {
        assert!(is_sentence_end("done."));
        assert!(is_sentence_end("done.\""));
        assert!(is_sentence_end("done!)"));
        assert!(is_sentence_end("done?\u{2019}"));
        assert!(!is_sentence_end("done,"));
        assert!(!is_sentence_end("done"));
    }

    #[test]
    fn punctuation_and_long_word_predicates() {
        assert!(has_punctuation("don't"));
        assert!(has_punctuation("end."));
        assert!(!has_punctuation("plain"));
        assert!(!has_punctuation("héllo"));

        assert!(is_long_word("absolute"));
        assert!(!is_long_word("shorter'"));
        assert!(!is_long_word("\"seven!\""));
    }

    #[test]
    fn reading_time_formats_both_shapes() {
        assert_eq!(format_reading_time(0), "0:00");
        assert_eq!(format_reading_time(30_000), "0:30");
        assert_eq!(format_reading_time(90_000), "1:30");
        assert_eq!(format_reading_time(3_600_000), "1:00:00");
        assert_eq!(format_reading_time(3_905_000), "1:05:05");
    }
}
