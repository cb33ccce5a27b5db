//! Folder name sanitization.

/// Maximum length of a sanitized folder name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Characters that are never allowed in a folder name.
pub const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Turn arbitrary input into a folder name that is legal on every platform.
///
/// Control characters and [`FORBIDDEN_CHARS`] are dropped, whitespace becomes
/// `_`, everything else is kept in order. The result is cut at
/// [`MAX_NAME_LEN`] characters and may be empty.
pub fn sanitize_folder_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() && !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .take(MAX_NAME_LEN)
        .collect()
}

/// Explain why an already sanitized name cannot be used as a folder, if it can't.
pub fn unusable_folder_name(name: &str) -> Option<&'static str> {
    match name {
        "" => Some("folder name is empty"),
        "." | ".." => Some("folder name cannot be a relative directory reference"),
        _ => None,
    }
}
