//! Clipboard domain models.
mod capture;
mod display_key;

pub use capture::{decide, normalize, CaptureDecision, SkipReason};
pub use display_key::{derive_key, DisplayKey, RedactedKey, ELLIPSIS};
