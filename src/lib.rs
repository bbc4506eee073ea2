//! snipboard: a clipboard history manager.
//!
//! The binary is a thin shell around [`bootstrap`]; the console front-end
//! lives in [`console`].

pub mod bootstrap;
pub mod console;
