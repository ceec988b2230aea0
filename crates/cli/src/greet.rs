//! Greeting formatting.

/// Subject used by [`greet_default`].
pub const DEFAULT_GREETING_SUBJECT: &str = "World";

/// Format the greeting for `name`.
///
/// Any input is accepted as-is, including the empty string.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Greeting with no explicit subject: `"Hello, World!"`.
pub fn greet_default() -> String {
    greet(DEFAULT_GREETING_SUBJECT)
}
