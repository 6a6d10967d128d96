//! Small string helpers shared across layers

/// Upper-case the first character of a string, leaving the rest as-is.
///
/// Display names are stored normalized (lower-cased), so responses
/// capitalize them for presentation: "alice" -> "Alice".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Truncate a string to at most `max` characters, appending an ellipsis
/// when anything was cut. Used for log lines, never for responses.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max).collect();
    format!("{}...", truncated)
}
