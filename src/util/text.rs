// src/util/text.rs

/// Extract the first non-empty line of a note, trimmed.
///
/// # Examples
///
/// ```
/// use wellpal::util::text::first_line;
///
/// let note = "\nFirst line\nSecond line";
/// assert_eq!(first_line(note), "First line");
/// ```
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Truncate to at most `max` characters, appending an ellipsis when cut.
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
