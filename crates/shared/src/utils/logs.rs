use anyhow::{Context, Result};
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Installs the global subscriber.
///
/// The console layer honours `RUST_LOG` and falls back to `info`. With
/// `enable_file` a JSON copy of every `info`+ event also goes to a daily
/// rolling file; keep the returned guard alive or buffered lines are lost.
pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) -> Result<Option<WorkerGuard>> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = if is_dev {
        fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(console_filter)
            .boxed()
    };

    let (file_layer, guard) = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(format!("rust_app_{component}"))
            .filename_suffix("log")
            .build(log_dir)
            .with_context(|| format!("Failed to open log directory {log_dir}"))?;
        let (file_writer, guard) = non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
