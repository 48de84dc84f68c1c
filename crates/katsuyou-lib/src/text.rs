//! Codepoint aware string helpers.
//!
//! Every count here is in `char`s, never bytes, so that a kana or kanji
//! counts as a single character.

/// Number of characters in `string`.
///
/// ```
/// assert_eq!(katsuyou_lib::text::char_len("たべる"), 3);
/// ```
#[inline]
pub fn char_len(string: &str) -> usize {
    string.chars().count()
}

/// Strip `n` characters from the end of `string`, saturating at the empty
/// string.
///
/// ```
/// assert_eq!(katsuyou_lib::text::trim_end("来る", 1), "来");
/// assert_eq!(katsuyou_lib::text::trim_end("る", 4), "");
/// ```
pub fn trim_end(string: &str, n: usize) -> &str {
    if n == 0 {
        return string;
    }

    match string.char_indices().rev().nth(n - 1) {
        Some((index, _)) => &string[..index],
        None => "",
    }
}

/// Strip `n` characters from the start of `string`, saturating at the empty
/// string.
///
/// ```
/// assert_eq!(katsuyou_lib::text::trim_start("これ", 1), "れ");
/// ```
pub fn trim_start(string: &str, n: usize) -> &str {
    match string.char_indices().nth(n) {
        Some((index, _)) => &string[index..],
        None => "",
    }
}

/// The last character of `string`.
#[inline]
pub fn last_char(string: &str) -> Option<char> {
    string.chars().next_back()
}
