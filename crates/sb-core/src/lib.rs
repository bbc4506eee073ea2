//! # sb-core
//!
//! Core domain models and history logic for snipboard.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: display-key derivation, the capture decision, the bounded
//! history store, the configuration DTO, and the ports implemented by the
//! outer layers.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod history;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{derive_key, CaptureDecision, DisplayKey, SkipReason};
pub use config::{AppConfig, HistoryConfig, RecopyMode, WatcherConfig};
pub use history::{ChangeCause, HistoryChanged, HistoryError, HistorySnapshot, HistoryStore, Insertion};
