use super::*;

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

#[test]
fn whitespace_runs_and_line_breaks_collapse() {
    assert_eq!(
        parse_text("Hello   world!\nNew line."),
        words(&["Hello", "world!", "New", "line."])
    );
}

#[test]
fn zero_width_characters_are_stripped() {
    assert_eq!(parse_text("foo\u{200B}bar"), words(&["foobar"]));
    assert_eq!(parse_text("\u{FEFF}lead trail\u{200D}"), words(&["lead", "trail"]));
    assert_eq!(parse_text("a\u{200C} b"), words(&["a", "b"]));
}

#[test]
fn degenerate_input_yields_no_words() {
    assert_eq!(parse_text(""), Vec::<String>::new());
    assert_eq!(parse_text("   \n\t  "), Vec::<String>::new());
    assert_eq!(parse_text("\u{200B}\u{FEFF}"), Vec::<String>::new());
}

#[test]
fn unicode_whitespace_separates_words() {
    assert_eq!(parse_text("uno\u{00A0}dos\u{2003}tres"), words(&["uno", "dos", "tres"]));
}

#[test]
fn count_words_matches_parse_text() {
    for text in ["", "one", "Hello   world!\nNew line.", "a\u{200B}b c", "  padded  "] {
        assert_eq!(count_words(text), parse_text(text).len(), "text: {text:?}");
    }
}

#[test]
fn chunks_of_two_group_greedily() {
    let input = words(&["a", "b", "c", "d", "e"]);
    assert_eq!(chunk_words(&input, 2), words(&["a b", "c d", "e"]));
}

#[test]
fn chunk_size_one_returns_words_unchanged() {
    let input = words(&["a", "b", "c"]);
    assert_eq!(chunk_words(&input, 1), input);
    // Zero clamps up to the minimum and takes the same path.
    assert_eq!(chunk_words(&input, 0), input);
}

#[test]
fn oversized_chunk_request_clamps_to_policy_max() {
    let input = words(&["a", "b", "c", "d"]);
    assert_eq!(chunk_words(&input, 50), words(&["a b c", "d"]));
}

#[test]
fn chunk_text_is_reconstructible_from_tokens() {
    let input = words(&["don't", "stop", "me", "now"]);
    for chunk in chunk_words(&input, 3) {
        for word in chunk.split(' ') {
            assert!(input.iter().any(|w| w == word));
        }
    }
}

#[test]
fn context_window_surrounds_the_current_word() {
    let input = words(&["w0", "w1", "w2", "w3", "w4", "w5"]);
    let context = word_context_windowed(&input, 3, 2);
    assert_eq!(context.before, "w1 w2");
    assert_eq!(context.current, "w3");
    assert_eq!(context.after, "w4 w5");
}

#[test]
fn context_truncates_at_list_boundaries() {
    let input = words(&["w0", "w1", "w2"]);
    let at_start = word_context_windowed(&input, 0, 8);
    assert_eq!(at_start.before, "");
    assert_eq!(at_start.current, "w0");
    assert_eq!(at_start.after, "w1 w2");

    let at_end = word_context_windowed(&input, 2, 8);
    assert_eq!(at_end.before, "w0 w1");
    assert_eq!(at_end.after, "");
}

#[test]
fn context_index_is_clamped_into_range() {
    let input = words(&["w0", "w1"]);
    let context = word_context(&input, 99);
    assert_eq!(context.current, "w1");
    assert_eq!(context.before, "w0");
}

#[test]
fn context_of_empty_list_is_empty() {
    assert_eq!(word_context(&vec![], 0), WordContext::default());
}
