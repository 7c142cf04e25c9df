//! Best-effort plain-text extraction from untrusted HTML.
//!
//! Not a conformant parser: tags become spaces, a few container elements
//! are dropped with their content, character references are decoded, and
//! whitespace collapses. Total over arbitrary input, nothing errors.

use alloc::string::String;

use super::entities::decode_entity;

/// Elements whose content is never prose; dropped wholesale.
const DROP_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Longest reference name accepted between `&` and `;`.
const ENTITY_NAME_CAP: usize = 10;

/// Extract readable text from `html`.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last_was_space = true;
    let mut cursor = 0usize;

    while cursor < html.len() {
        let rest = &html[cursor..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        if ch == '<' {
            match rest.find('>') {
                Some(close) => {
                    let inner = &rest[1..close];
                    cursor += close + 1;
                    if let Some(element) = dropped_element(inner) {
                        cursor += skip_dropped_element(&html[cursor..], element);
                    }
                    push_space(&mut out, &mut last_was_space);
                }
                None => {
                    // Unterminated bracket is literal text.
                    out.push('<');
                    last_was_space = false;
                    cursor += 1;
                }
            }
            continue;
        }

        if ch == '&' {
            if let Some((decoded, consumed)) = decode_reference(rest) {
                match decoded {
                    Some(decoded_char) if decoded_char.is_whitespace() => {
                        push_space(&mut out, &mut last_was_space);
                    }
                    Some(decoded_char) => {
                        out.push(decoded_char);
                        last_was_space = false;
                    }
                    // Unrecognized or out-of-range reference: dropped.
                    None => {}
                }
                cursor += consumed;
            } else {
                out.push('&');
                last_was_space = false;
                cursor += 1;
            }
            continue;
        }

        if ch.is_whitespace() {
            push_space(&mut out, &mut last_was_space);
        } else if !ch.is_control() {
            out.push(ch);
            last_was_space = false;
        }
        cursor += ch.len_utf8();
    }

    while out.ends_with(' ') {
        let _ = out.pop();
    }
    out
}

fn push_space(out: &mut String, last_was_space: &mut bool) {
    if !*last_was_space && !out.is_empty() {
        out.push(' ');
    }
    *last_was_space = true;
}

/// Entity syntax starting at `rest[0] == '&'`. Returns the decoded
/// character (`None` when the name is unrecognized) and the byte length
/// consumed, or `None` when the text is not reference syntax at all.
fn decode_reference(rest: &str) -> Option<(Option<char>, usize)> {
    let bytes = rest.as_bytes();
    let mut len = 0usize;

    while len < ENTITY_NAME_CAP {
        match bytes.get(1 + len) {
            Some(b';') => {
                if len == 0 {
                    return None;
                }
                return Some((decode_entity(&rest[1..1 + len]), len + 2));
            }
            Some(byte) if byte.is_ascii_alphanumeric() || *byte == b'#' => len += 1,
            _ => return None,
        }
    }
    None
}

/// Name of a drop-wholesale element opened by `tag`, if any.
fn dropped_element(tag: &str) -> Option<&'static str> {
    let tag = tag.trim();
    if tag.is_empty() || tag.starts_with(['/', '!', '?']) {
        return None;
    }
    if tag.ends_with('/') {
        // Self-closing, no content to skip.
        return None;
    }

    let name_len = tag
        .bytes()
        .take_while(|byte| byte.is_ascii_alphanumeric())
        .count();
    let name = &tag[..name_len];
    DROP_ELEMENTS
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Byte length of `remaining` up to and including the close tag of
/// `element`, or all of it when the close tag never appears.
fn skip_dropped_element(remaining: &str, element: &str) -> usize {
    let bytes = remaining.as_bytes();
    let mut needle = String::from("</");
    needle.push_str(element);
    let needle = needle.as_bytes();

    let mut from = 0usize;
    while let Some(start) = find_ignore_ascii_case(bytes, needle, from) {
        let name_end = start + needle.len();
        match bytes.get(name_end) {
            Some(b'>') => return name_end + 1,
            Some(byte) if byte.is_ascii_whitespace() => {
                match bytes[name_end..].iter().position(|&b| b == b'>') {
                    Some(rel) => return name_end + rel + 1,
                    None => return remaining.len(),
                }
            }
            // Longer tag name that merely shares the prefix.
            _ => from = start + 1,
        }
    }
    remaining.len()
}

fn find_ignore_ascii_case(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let max_start = haystack.len() - needle.len();
    if from > max_start {
        return None;
    }

    (from..=max_start).find(|&idx| haystack[idx..idx + needle.len()].eq_ignore_ascii_case(needle))
}
