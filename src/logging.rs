use std::fs;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging on stderr, plus a daily-rotated JSON file when `log_dir` is set.
///
/// Console output goes to stderr so the CSV summary on stdout stays clean.
pub fn init_logging(log_dir: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("deal_csv=info"));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let file_layer = log_dir.and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Could not create log directory {}: {}", dir.display(), e);
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(dir, "deal_csv.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        // The guard flushes on drop; the process is short-lived so keep it for its lifetime
        std::mem::forget(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    });

    // try_init so repeated calls (tests, embedding) don't panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
