use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use super::{HistoryError, HistorySnapshot};
use crate::clipboard::{normalize, DisplayKey};
use crate::config::{HistoryConfig, RecopyMode};

/// Result of [`HistoryStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The clipping is now the head of the history.
    Inserted {
        key: DisplayKey,
        /// Tail entry pushed out to make room, if the store was full.
        evicted: Option<DisplayKey>,
    },
    /// An entry with the same key already exists; nothing changed.
    AlreadyPresent { key: DisplayKey },
}

impl Insertion {
    pub fn key(&self) -> &DisplayKey {
        match self {
            Insertion::Inserted { key, .. } | Insertion::AlreadyPresent { key } => key,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted { .. })
    }
}

/// Bounded, ordered, deduplicated clipboard history.
///
/// Invariants held after every public call:
/// - `order.len() <= capacity`
/// - the keys of `clips` are exactly the keys in `order`
/// - no key appears twice in `order`
#[derive(Debug)]
pub struct HistoryStore {
    order: VecDeque<DisplayKey>,
    clips: HashMap<DisplayKey, String>,
    capacity: usize,
    max_display_chars: usize,
    recopy_mode: RecopyMode,
    version: u64,
}

impl HistoryStore {
    pub fn new(config: &HistoryConfig) -> Result<Self, HistoryError> {
        config.validate()?;

        Ok(Self {
            order: VecDeque::with_capacity(config.capacity),
            clips: HashMap::with_capacity(config.capacity),
            capacity: config.capacity,
            max_display_chars: config.max_display_chars,
            recopy_mode: config.recopy_mode,
            version: 0,
        })
    }

    /// Derive the key this store would file `full_text` under.
    pub fn derive_key(&self, full_text: &str) -> DisplayKey {
        DisplayKey::derive(full_text, self.max_display_chars)
    }

    /// Record a clipping at the head of the history.
    ///
    /// The text is trimmed first. If its key is already present the call is a
    /// no-op; callers are expected to check [`HistoryStore::contains`] before
    /// inserting. When the store is full the tail entry is evicted.
    ///
    /// # Errors
    ///
    /// [`HistoryError::EmptyClip`] if nothing is left after trimming.
    pub fn insert(&mut self, full_text: &str) -> Result<Insertion, HistoryError> {
        let text = normalize(full_text).ok_or(HistoryError::EmptyClip)?;
        let key = self.derive_key(text);

        if self.contains(&key) {
            return Ok(Insertion::AlreadyPresent { key });
        }

        let evicted = if self.order.len() >= self.capacity {
            self.evict_tail()
        } else {
            None
        };

        self.order.push_front(key.clone());
        self.clips.insert(key.clone(), text.to_string());
        self.version += 1;
        debug_assert!(self.check_consistency().is_ok());

        debug!(
            key = %key.redacted(),
            len = self.order.len(),
            evicted = evicted.is_some(),
            version = self.version,
            "history entry inserted"
        );

        Ok(Insertion::Inserted { key, evicted })
    }

    /// Whether `key` is in the ordered sequence.
    pub fn contains(&self, key: &DisplayKey) -> bool {
        self.order.contains(key)
    }

    /// Full text for `key`, if present.
    pub fn lookup(&self, key: &DisplayKey) -> Option<&str> {
        self.clips.get(key).map(String::as_str)
    }

    /// Fetch the full text behind `key` so it can be written back to the
    /// clipboard.
    ///
    /// In [`RecopyMode::Consuming`] the entry is removed first; the watcher
    /// will record it again at the head once it observes the write. In
    /// [`RecopyMode::NonConsuming`] the entry stays where it is.
    ///
    /// # Errors
    ///
    /// [`HistoryError::NotFound`] if `key` is not in the history.
    pub fn recopy(&mut self, key: &DisplayKey) -> Result<String, HistoryError> {
        match self.recopy_mode {
            RecopyMode::Consuming => self.remove(key),
            RecopyMode::NonConsuming => self
                .lookup(key)
                .map(str::to_string)
                .ok_or_else(|| HistoryError::NotFound(key.clone())),
        }
    }

    /// Copy of the current order, most recent first.
    pub fn snapshot_order(&self) -> Vec<DisplayKey> {
        self.order.iter().cloned().collect()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            version: self.version,
            keys: self.snapshot_order(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn recopy_mode(&self) -> RecopyMode {
        self.recopy_mode
    }

    /// Monotonic counter bumped on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Verify that the key sequence and the text map describe the same set.
    pub fn check_consistency(&self) -> Result<(), HistoryError> {
        if self.order.len() > self.capacity {
            return Err(HistoryError::Inconsistent(format!(
                "sequence holds {} keys but capacity is {}",
                self.order.len(),
                self.capacity
            )));
        }
        if self.order.len() != self.clips.len() {
            return Err(HistoryError::Inconsistent(format!(
                "sequence holds {} keys but map holds {}",
                self.order.len(),
                self.clips.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.order.len());
        for key in &self.order {
            if !seen.insert(key) {
                return Err(HistoryError::Inconsistent(format!(
                    "key {} appears twice in sequence",
                    key.redacted()
                )));
            }
            if !self.clips.contains_key(key) {
                return Err(HistoryError::Inconsistent(format!(
                    "key {} has no text",
                    key.redacted()
                )));
            }
        }
        Ok(())
    }

    fn remove(&mut self, key: &DisplayKey) -> Result<String, HistoryError> {
        let position = self
            .order
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| HistoryError::NotFound(key.clone()))?;

        self.order.remove(position);
        let text = self.clips.remove(key).ok_or_else(|| {
            HistoryError::Inconsistent(format!(
                "key {} was sequenced without text",
                key.redacted()
            ))
        })?;
        self.version += 1;
        debug_assert!(self.check_consistency().is_ok());

        debug!(key = %key.redacted(), len = self.order.len(), version = self.version, "history entry removed");
        Ok(text)
    }

    fn evict_tail(&mut self) -> Option<DisplayKey> {
        let tail = self.order.pop_back()?;
        self.clips.remove(&tail);
        Some(tail)
    }
}
