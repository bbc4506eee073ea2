//! # sb-platform
//!
//! Platform-specific implementations for snipboard.
//!
//! This crate contains the pieces that touch the operating system (clipboard,
//! per-user directories) and the runtime loop that owns the history store.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;
pub mod ipc;
pub mod runtime;
