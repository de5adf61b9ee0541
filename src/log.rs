// src/log.rs
// Subscriber setup: compact lines on stderr, plus an append-only debug log.
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, time::Uptime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::consts::LOG_FILE;

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default = if verbose { "mat_scrape=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let stderr = fmt::layer()
        .compact()
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr);

    // File layer always records debug, whatever the console shows.
    let file = open_log_file(Path::new(LOG_FILE)).map(|f| {
        fmt::layer()
            .with_timer(Uptime::default())
            .with_ansi(false)
            .with_writer(Mutex::new(f))
            .with_filter(EnvFilter::new("mat_scrape=debug"))
    });

    let _ = tracing_subscriber::registry()
        .with(stderr.with_filter(filter))
        .with(file)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
