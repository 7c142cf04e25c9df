//! HTML-safe markup for fixation rendering.
//!
//! Every raw substring entering rendered markup passes through
//! [`escape_html`] exactly once; the render functions wrap fragments
//! that are already escaped and never escape twice.

use alloc::string::String;

use crate::fixation::{self, OrpCalculator};

mod entities;
mod strip;

pub use strip::strip_html;

/// Escape `& < > " '` for safe interpolation into markup. No other
/// characters are altered.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Rendering mode flags. ORP highlighting and bionic bolding are
/// mutually exclusive per call; bionic wins when both are set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    pub orp_enabled: bool,
    pub bionic: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            orp_enabled: true,
            bionic: false,
        }
    }
}

/// Escaped fragments of one word split around its fixation character.
///
/// Unescaping and concatenating the three fragments reproduces the word
/// exactly. With highlighting disabled the whole word lands in `orp`
/// and `before`/`after` stay empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordParts {
    pub before: String,
    pub orp: String,
    pub after: String,
}

/// Split `word` at its recognition point and escape each fragment.
pub fn word_parts(calc: &mut OrpCalculator, word: &str, orp_enabled: bool) -> WordParts {
    if !orp_enabled || word.is_empty() {
        return WordParts {
            before: String::new(),
            orp: escape_html(word),
            after: String::new(),
        };
    }

    let index = calc.orp_index(word);
    let mut before = String::new();
    let mut orp = String::new();
    let mut after = String::new();
    for (offset, ch) in word.chars().enumerate() {
        if offset < index {
            before.push(ch);
        } else if offset == index {
            orp.push(ch);
        } else {
            after.push(ch);
        }
    }

    WordParts {
        before: escape_html(&before),
        orp: escape_html(&orp),
        after: escape_html(&after),
    }
}

/// Wrap already-escaped word parts in the fixation span.
pub fn render_word(parts: &WordParts) -> String {
    const SPAN_OPEN: &str = "<span class=\"orp\">";
    const SPAN_CLOSE: &str = "</span>";

    let mut out = String::with_capacity(
        parts.before.len() + parts.orp.len() + parts.after.len() + SPAN_OPEN.len() + SPAN_CLOSE.len(),
    );
    out.push_str(&parts.before);
    out.push_str(SPAN_OPEN);
    out.push_str(&parts.orp);
    out.push_str(SPAN_CLOSE);
    out.push_str(&parts.after);
    out
}

/// Bold the bionic prefix of `word`. Escaping happens here, once per
/// fragment.
pub fn render_bionic_word(word: &str) -> String {
    render_bionic_split(word, fixation::bionic_fixation(word))
}

/// Render `word` with its first `split` chars bolded.
pub fn render_bionic_split(word: &str, split: usize) -> String {
    if split == 0 {
        return escape_html(word);
    }

    let mut lead = String::new();
    let mut rest = String::new();
    for (offset, ch) in word.chars().enumerate() {
        if offset < split {
            lead.push(ch);
        } else {
            rest.push(ch);
        }
    }

    let mut out = String::new();
    out.push_str("<b>");
    out.push_str(&escape_html(&lead));
    out.push_str("</b>");
    out.push_str(&escape_html(&rest));
    out
}

/// Markup for one whole chunk in the mode selected by `options`,
/// sub-words joined by single spaces.
pub fn render_chunk(calc: &mut OrpCalculator, chunk: &str, options: RenderOptions) -> String {
    if chunk.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for (i, word) in chunk.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if options.bionic {
            out.push_str(&render_bionic_word(word));
        } else if options.orp_enabled {
            out.push_str(&render_word(&word_parts(calc, word, true)));
        } else {
            out.push_str(&escape_html(word));
        }
    }
    out
}
