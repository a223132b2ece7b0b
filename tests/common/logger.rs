use std::sync::Once;

use env_logger::{Builder, Env};

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Prefer INFO for CI noise; override via RUST_LOG when needed
        let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
        builder.is_test(true).format_timestamp_millis();

        // Another test binary may have installed a logger already.
        let _ = builder.try_init();
    });
}
