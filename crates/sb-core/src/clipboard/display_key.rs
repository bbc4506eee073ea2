//! Display keys.
//!
//! A display key is the short form of a clipping shown to the user. It is also
//! the token the history store orders and looks entries up by, so two
//! clippings that derive the same key are the same entry as far as the store
//! is concerned.
//!
//! ## Derivation
//!
//! - Multi-line text keeps only its first line, trailing whitespace trimmed,
//!   followed by [`ELLIPSIS`].
//! - Single-line text longer than the display limit (counted in characters)
//!   is cut at the limit, trailing whitespace trimmed, followed by
//!   [`ELLIPSIS`].
//! - Anything else is used verbatim.
//!
//! Derivation is not idempotent: feeding a derived key back in can shorten it
//! again.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Marker appended to any key that does not show the whole clipping.
pub const ELLIPSIS: &str = "...";

/// Derive the display key for `full_text`.
///
/// `max_display_chars` is the longest single-line text kept verbatim.
pub fn derive_key(full_text: &str, max_display_chars: usize) -> String {
    if let Some(line_end) = full_text.find(['\n', '\r']) {
        let first_line = full_text[..line_end].trim_end();
        return format!("{first_line}{ELLIPSIS}");
    }

    match full_text.char_indices().nth(max_display_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", full_text[..cut].trim_end()),
        None => full_text.to_string(),
    }
}

/// Derived, possibly truncated representation of a clipping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DisplayKey(String);

impl DisplayKey {
    /// Derive the key for `full_text` (see [`derive_key`]).
    pub fn derive(full_text: &str, max_display_chars: usize) -> Self {
        Self(derive_key(full_text, max_display_chars))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the key hides part of the clipping.
    pub fn is_abbreviated(&self) -> bool {
        self.0.ends_with(ELLIPSIS)
    }

    /// Log field form of the key. Short keys are the whole clipping.
    pub fn redacted(&self) -> RedactedKey<'_> {
        RedactedKey(self)
    }
}

/// Prints a key's length and whether it is abbreviated, never its text.
#[derive(Debug, Clone, Copy)]
pub struct RedactedKey<'a>(&'a DisplayKey);

impl fmt::Display for RedactedKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars = self.0.as_str().chars().count();
        if self.0.is_abbreviated() {
            write!(f, "<{chars} chars, abbreviated>")
        } else {
            write!(f, "<{chars} chars>")
        }
    }
}

impl fmt::Display for DisplayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DisplayKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DisplayKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for DisplayKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DisplayKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_key_hides_the_text() {
        let short = DisplayKey::derive("hunter2", 55);
        assert_eq!(short.redacted().to_string(), "<7 chars>");

        let long = DisplayKey::derive("token: s3cr3t\nsecond line", 55);
        let shown = long.redacted().to_string();
        assert_eq!(shown, "<16 chars, abbreviated>");
        assert!(!shown.contains("s3cr3t"));
    }

    #[test]
    fn short_single_line_is_kept_verbatim() {
        assert_eq!(derive_key("hello world", 55), "hello world");
    }

    #[test]
    fn text_exactly_at_limit_is_not_truncated() {
        let text = "y".repeat(60);
        assert_eq!(derive_key(&text, 60), text);
    }

    #[test]
    fn long_single_line_is_truncated_with_ellipsis() {
        let text = "x".repeat(70);
        let key = derive_key(&text, 60);
        assert_eq!(key, format!("{}...", "x".repeat(60)));
    }

    #[test]
    fn truncation_trims_trailing_whitespace_before_marker() {
        // the cut lands right after a run of spaces
        let text = format!("abc{}tail-that-is-cut", " ".repeat(7));
        assert_eq!(derive_key(&text, 10), "abc...");
    }

    #[test]
    fn multi_line_keeps_first_line_only() {
        assert_eq!(derive_key("first line   \nsecond line", 55), "first line...");
    }

    #[test]
    fn carriage_return_counts_as_line_break() {
        assert_eq!(derive_key("windows line\r\nnext", 55), "windows line...");
    }

    #[test]
    fn long_first_line_is_not_additionally_truncated() {
        let text = format!("{}\nrest", "z".repeat(80));
        assert_eq!(derive_key(&text, 55), format!("{}...", "z".repeat(80)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(12);
        let key = derive_key(&text, 10);
        assert_eq!(key, format!("{}...", "é".repeat(10)));
    }

    #[test]
    fn derivation_is_deterministic() {
        let text = "some\nmulti-line\nclipping";
        assert_eq!(derive_key(text, 30), derive_key(text, 30));
        assert_eq!(DisplayKey::derive(text, 30), DisplayKey::derive(text, 30));
    }

    #[test]
    fn derivation_is_not_idempotent() {
        let once = derive_key("aaaa bbbbbbb", 5);
        let twice = derive_key(&once, 5);
        assert_eq!(once, "aaaa...");
        assert_eq!(twice, "aaaa....");
    }

    #[test]
    fn abbreviated_flag_follows_marker() {
        assert!(DisplayKey::derive("a\nb", 55).is_abbreviated());
        assert!(!DisplayKey::derive("ab", 55).is_abbreviated());
    }
}
