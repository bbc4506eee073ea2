//! In-memory clipboard history.
//!
//! The history is a bounded, ordered, deduplicated association between a
//! display key and the full clipped text.
//!
//! ## Architecture
//!
//! [`HistoryStore`] keeps an ordered sequence of keys (most recently added
//! first) next to a key → text map. Both structures are only touched inside
//! the store's own methods, so each insert, eviction or removal updates them
//! together. When the store is full the oldest survivor is evicted (FIFO by
//! insertion, not by access).
//!
//! Consumers never hold a live view: they get a [`HistorySnapshot`] and pass
//! keys back when acting on an entry.

mod error;
mod snapshot;
mod store;

pub use error::HistoryError;
pub use snapshot::{ChangeCause, HistoryChanged, HistorySnapshot};
pub use store::{HistoryStore, Insertion};
