use std::time::Duration;

use super::{HistoryConfig, RecopyMode, WatcherConfig};

pub const DEFAULT_CAPACITY: usize = 30;
pub const DEFAULT_MAX_DISPLAY_CHARS: usize = 55;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_display_chars: DEFAULT_MAX_DISPLAY_CHARS,
            recopy_mode: RecopyMode::default(),
        }
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
