// logging.rs - Logger setup

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs env_logger once. `RUST_LOG` wins over `default_level` when set;
/// later calls are ignored.
pub fn init_logging(default_level: LevelFilter) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.filter_level(default_level),
        };

        // The test harness may already own the global logger
        if builder.try_init().is_ok() {
            log::debug!("logging initialized at {default_level}");
        }
    });
}
