//! Logging bootstrap.
//!
//! One-line JSON records go to a daily-rolling file; a human-readable layer
//! writes to stdout. `log` macro output is bridged into `tracing` so crates
//! using either facade end up in the same sinks. Filtering follows `RUST_LOG`
//! and defaults to `info`.

use std::path::PathBuf;
use std::sync::OnceLock;

use log::LevelFilter;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize the logging stack. Safe to call more than once; only the first
/// call has any effect.
pub fn init_logger(log_dir: PathBuf) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;

    // Forward `log` crate records to tracing
    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&log_dir, "wakecoach.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%dT%H:%M:%S%.3f%:z".to_string(),
        ))
        .with_filter(env_filter());

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_filter(env_filter());

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    let _ = LOGGER_READY.set(());
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
