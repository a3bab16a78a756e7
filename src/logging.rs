//! Tracing initialization
//!
//! Reads the `HUIDONG_LOG` environment variable for filter directives,
//! e.g. `HUIDONG_LOG=huidong::planning=debug`. Falls back to the directive
//! for the current verbosity. Logs go to stderr so rendered plans on stdout
//! stay clean.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Verbosity;

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "HUIDONG_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(verbosity: Verbosity) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
