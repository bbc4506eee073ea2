pub mod event_bus;
mod runtime;

pub use event_bus::{command_channel, PlatformCommandReceiver, PlatformCommandSender};
pub use runtime::PlatformRuntime;
