//! Small string helpers shared by the translation rules.
//!
//! All lengths are counted in `char`s, never bytes, so slicing can't land
//! inside a multi-byte sequence.

/// Returns the first line of `text` (without its line terminator).
pub(crate) fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// Returns the longest prefix of `text` holding at most `max` characters.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Cuts `text` to `max` characters and appends `marker` when it was longer.
pub(crate) fn ellipsize(text: &str, max: usize, marker: &str) -> String {
    let cut = truncate_chars(text, max);
    if cut.len() == text.len() {
        text.to_owned()
    } else {
        format!("{cut}{marker}")
    }
}

/// Capitalizes the first letter of every alphabetic run and lowercases the
/// rest, so `"opened"` becomes `"Opened"` and `"ready_for_review"` becomes
/// `"Ready_For_Review"`.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
