//! Marker stripping.

/// Reserved character that delimits a variable occurrence in raw utterance text.
pub const MARKER: char = '%';

/// Remove every [`MARKER`] from `s`, keeping all other characters in order.
#[must_use]
pub fn sanitize(s: &str) -> String {
    s.chars().filter(|&c| c != MARKER).collect()
}
