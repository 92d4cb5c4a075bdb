//! Process-wide logger setup

use std::sync::Once;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Initialize `env_logger` once; later calls are ignored
///
/// `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=arcade_demos=debug`.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.parse_filters(DEFAULT_FILTER),
        };

        builder.format_timestamp_millis();
        // Ignore the error if a test harness already installed a logger
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
}
