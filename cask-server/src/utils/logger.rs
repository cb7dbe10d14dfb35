//! Logging initialization.

use std::path::Path;

use tracing::Level;

/// Initialize the global `tracing` subscriber.
///
/// With `log_dir` set, output goes to a daily-rolling file in that directory
/// (created if missing); otherwise it goes to stdout with ANSI colors.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let level = log_level.parse::<Level>().unwrap_or(Level::INFO);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if !log_path.exists() {
            std::fs::create_dir_all(log_path).expect("Failed to create log directory");
        }
        let file_appender = tracing_appender::rolling::daily(dir, "cask-server.log");
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(file_appender)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .init();
    }
}
