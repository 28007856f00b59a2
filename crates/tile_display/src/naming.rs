//! Display names for tile type identifiers.

use std::sync::LazyLock;

use regex::Regex;

/// Letters, non-spacing marks, decimal digits and connector punctuation.
static WORD_CHAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{Mn}\p{Nd}\p{Pc}]$").ok());

/// Split a concatenated identifier like `StoneBlock` into `Stone Block`.
///
/// A space goes before every ASCII uppercase letter or digit whose previous
/// character is a word character. The first character never gets one. This
/// is the set of positions the pattern `\B[A-Z0-9]` matches, so runs of
/// capitals are split too (`TNT` becomes `T N T`).
pub fn format_tile_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    let mut prev_is_word = false;

    for ch in raw.chars() {
        if prev_is_word && (ch.is_ascii_uppercase() || ch.is_ascii_digit()) {
            out.push(' ');
        }
        out.push(ch);
        prev_is_word = is_word_char(ch);
    }

    out
}

fn is_word_char(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '_';
    }
    let mut buf = [0u8; 4];
    match WORD_CHAR.as_ref() {
        Some(word) => word.is_match(ch.encode_utf8(&mut buf)),
        None => ch.is_alphanumeric(),
    }
}
