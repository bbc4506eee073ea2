//! Capture decision for a single clipboard sample.
//!
//! The watcher reads the clipboard, then asks [`decide`] whether the sample is
//! something the history has not seen yet. The decision only reads the store;
//! inserting is left to the caller so the read and the write happen in the
//! same mutation window.

use super::DisplayKey;
use crate::history::HistoryStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureDecision {
    /// Nothing to record for this sample.
    Skip(SkipReason),
    /// The sample maps to a key that is already in the history.
    Known(DisplayKey),
    /// The sample is new and should be inserted.
    Capture { text: String, key: DisplayKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Clipboard could not be read or held no text.
    Unavailable,
    /// Clipboard text was empty after trimming.
    Blank,
}

/// Trim a raw sample, returning `None` when nothing is left.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Classify a clipboard sample against the current history.
pub fn decide(sample: Option<&str>, store: &HistoryStore) -> CaptureDecision {
    let Some(raw) = sample else {
        return CaptureDecision::Skip(SkipReason::Unavailable);
    };
    let Some(text) = normalize(raw) else {
        return CaptureDecision::Skip(SkipReason::Blank);
    };

    let key = store.derive_key(text);
    if store.contains(&key) {
        CaptureDecision::Known(key)
    } else {
        CaptureDecision::Capture {
            text: text.to_string(),
            key,
        }
    }
}
