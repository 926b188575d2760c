//! Whitespace normalization applied to every scanned line.
//!
//! Logs are often column-aligned with a varying amount of padding. Folding
//! each whitespace run to a single space lets `"loss: {loss}"` match
//! `"loss:     0.3"` without the user writing `\s+`.

use std::borrow::Cow;

/// Collapse every maximal whitespace run to one space and trim both ends.
///
/// Borrows when the line is already normalized.
pub fn normalize(line: &str) -> Cow<'_, str> {
    // Lone spaces are left alone so already-clean lines are not reallocated.
    let collapsed = regex!(r"\s{2,}|[^\S ]").replace_all(line, " ");
    match collapsed {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(' ')),
        Cow::Owned(s) => {
            let trimmed = s.trim_matches(' ');
            if trimmed.len() == s.len() { Cow::Owned(s) } else { Cow::Owned(trimmed.to_string()) }
        }
    }
}
