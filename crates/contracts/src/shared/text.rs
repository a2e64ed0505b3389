//! Text helpers shared by request builders

/// Maps an empty optional text field to `None`.
///
/// Only the exact empty string counts as "not provided"; whitespace is sent
/// as typed.
pub fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
