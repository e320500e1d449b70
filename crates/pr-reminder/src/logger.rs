//! Console logging using env_logger
//!
//! The bot runs from cron, so logs go to stderr where the scheduler
//! captures them. `RUST_LOG` controls the level and defaults to `info`.

use env_logger::Env;

/// Initialize logging; call once at startup
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}
