// src/log.rs
//
// Process-wide logging. One subscriber, installed once at startup:
// stderr for humans, plus an optional plain-text file next to the output.
// Lines are stamped with time since start.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, fmt::time::uptime, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when set. Calling this twice is harmless:
/// the second call finds a subscriber already installed and does nothing.
pub fn init(level: Level, log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    let file_layer = log_file.and_then(open_log_file).map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_timer(uptime())
            .with_writer(Mutex::new(file))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(uptime())
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
            return None;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
