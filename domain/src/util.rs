//! Shared utility functions.

/// Shorten text for log lines to at most `max_chars` characters.
///
/// Counts characters rather than bytes so Korean and emoji input is never
/// cut mid-codepoint. Appends `...` when anything was removed.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
