use serde::Serialize;

use crate::clipboard::DisplayKey;

/// Point-in-time copy of the history order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistorySnapshot {
    /// Store version the snapshot was taken at.
    pub version: u64,
    /// Keys, most recently added first.
    pub keys: Vec<DisplayKey>,
}

impl HistorySnapshot {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayKey> {
        self.keys.iter()
    }
}

/// Why the history changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeCause {
    /// A new clipping was inserted, possibly pushing out the oldest one.
    Captured {
        key: DisplayKey,
        evicted: Option<DisplayKey>,
    },
    /// An entry was taken out by a consuming recopy.
    RecopyRemoved { key: DisplayKey },
}

/// Change notification delivered to the rendering side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryChanged {
    pub snapshot: HistorySnapshot,
    pub cause: ChangeCause,
}
