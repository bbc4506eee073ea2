pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::{run_app, serve};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{open_system_clipboard, wire_app, AppWiring};
