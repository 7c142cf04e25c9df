//! Named and numeric character reference decoding.

pub(super) fn decode_entity(entity: &str) -> Option<char> {
    if entity.eq_ignore_ascii_case("amp") {
        Some('&')
    } else if entity.eq_ignore_ascii_case("lt") {
        Some('<')
    } else if entity.eq_ignore_ascii_case("gt") {
        Some('>')
    } else if entity.eq_ignore_ascii_case("quot") {
        Some('"')
    } else if entity.eq_ignore_ascii_case("apos") {
        Some('\'')
    } else if entity.eq_ignore_ascii_case("lsquo") {
        Some('\u{2018}')
    } else if entity.eq_ignore_ascii_case("rsquo") {
        Some('\u{2019}')
    } else if entity.eq_ignore_ascii_case("ldquo") {
        Some('\u{201C}')
    } else if entity.eq_ignore_ascii_case("rdquo") {
        Some('\u{201D}')
    } else if entity.eq_ignore_ascii_case("laquo") {
        Some('«')
    } else if entity.eq_ignore_ascii_case("raquo") {
        Some('»')
    } else if entity.eq_ignore_ascii_case("nbsp") {
        Some(' ')
    } else if entity.eq_ignore_ascii_case("ndash") {
        Some('\u{2013}')
    } else if entity.eq_ignore_ascii_case("mdash") {
        Some('\u{2014}')
    } else if entity.eq_ignore_ascii_case("hellip") {
        Some('\u{2026}')
    } else if entity.eq_ignore_ascii_case("aacute") {
        Some('á')
    } else if entity.eq_ignore_ascii_case("eacute") {
        Some('é')
    } else if entity.eq_ignore_ascii_case("iacute") {
        Some('í')
    } else if entity.eq_ignore_ascii_case("oacute") {
        Some('ó')
    } else if entity.eq_ignore_ascii_case("uacute") {
        Some('ú')
    } else if entity.eq_ignore_ascii_case("ntilde") {
        Some('ñ')
    } else if entity.eq_ignore_ascii_case("uuml") {
        Some('ü')
    } else if entity.eq_ignore_ascii_case("agrave") {
        Some('à')
    } else if entity.eq_ignore_ascii_case("egrave") {
        Some('è')
    } else if entity.eq_ignore_ascii_case("igrave") {
        Some('ì')
    } else if entity.eq_ignore_ascii_case("ograve") {
        Some('ò')
    } else if entity.eq_ignore_ascii_case("ugrave") {
        Some('ù')
    } else if entity.eq_ignore_ascii_case("ccedil") {
        Some('ç')
    } else if entity.eq_ignore_ascii_case("iexcl") {
        Some('¡')
    } else if entity.eq_ignore_ascii_case("iquest") {
        Some('¿')
    } else {
        decode_numeric_entity(entity)
    }
}

/// Decimal and hexadecimal character references. Out-of-range and
/// unparseable values decode to nothing.
pub(super) fn decode_numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let (digits, radix) = match digits.strip_prefix(['x', 'X']) {
        Some(hex_digits) => (hex_digits, 16u32),
        None => (digits, 10u32),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value = 0u32;
    for ch in digits.chars() {
        let step = ch.to_digit(radix)?;
        value = value.saturating_mul(radix).saturating_add(step);
    }

    if value == 0 || value > 0x10FFFF {
        return None;
    }
    char::from_u32(value)
}
