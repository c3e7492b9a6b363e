//! Text processing helpers: bounded substring extraction and a
//! whitespace/case-insensitive palindrome check.
//!
//! Indices and lengths are measured in Unicode scalar values (`char`s),
//! not bytes, so any index is safe to pass. No grapheme-cluster handling.

use crate::utils::error::{Result, UtilsError};
use regex::Regex;

/// Extracts the substring of `text` covering `[start, end)` with
/// out-of-range indices clamped to the valid span.
///
/// A negative `start` becomes 0 and an `end` past the last char becomes
/// the char count. A reversed or empty range yields `""`. The only error
/// is an absent `text`.
pub fn extract_substring(text: Option<&str>, start: i64, end: i64) -> Result<String> {
    let text = text.ok_or_else(|| UtilsError::MissingInputError {
        field: "input_text".to_string(),
    })?;

    let char_count = text.chars().count() as i64;

    let adjusted_start = if start < 0 { 0 } else { start };
    let adjusted_end = if end > char_count { char_count } else { end };

    if adjusted_start != start || adjusted_end != end {
        tracing::debug!(
            "Clamped substring range [{}, {}) to [{}, {})",
            start,
            end,
            adjusted_start,
            adjusted_end
        );
    }

    if adjusted_start >= adjusted_end {
        return Ok(String::new());
    }

    Ok(text
        .chars()
        .skip(adjusted_start as usize)
        .take((adjusted_end - adjusted_start) as usize)
        .collect())
}

/// Checks whether `text` reads the same backward as forward, ignoring
/// case and whitespace. `None` is simply not a palindrome, never an error.
///
/// Whitespace means the full Unicode class the `\s` regex shorthand
/// matches, and lowercasing is `str::to_lowercase`.
pub fn is_palindrome_ignoring_case(text: Option<&str>) -> bool {
    let text = match text {
        Some(t) => t,
        None => return false,
    };

    let whitespace = Regex::new(r"\s+").unwrap();
    let normalized: Vec<char> = whitespace
        .replace_all(text, "")
        .to_lowercase()
        .chars()
        .collect();

    tracing::trace!("Palindrome scan over {} normalized chars", normalized.len());

    let mut left = 0;
    let mut right = normalized.len().saturating_sub(1);

    while left < right {
        if normalized[left] != normalized[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}
