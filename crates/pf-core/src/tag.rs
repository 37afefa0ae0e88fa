//! Tags: normalized lowercase identifiers derived from display names.
//!
//! Tags key substances in a registry, compositions in a stream, and are the
//! query form used against reference-data sources (`"n butane"` → `"n+butane"`).

/// Normalize a human-readable name into a tag.
///
/// Trims, lowercases and joins whitespace-separated words with `+`.
pub fn name_to_tag(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("+")
}
