// showcase - a terminal catalogue of interactive widget demos
//
// Startup order:
// 1. Parse the command line; headless subcommands run and exit
// 2. Load configuration (env > file > defaults)
// 3. Install tracing: in-memory buffer for the logs strip, optional JSON file
// 4. Hand off to the TUI until the user quits

mod catalogue;
mod cli;
mod config;
mod logging;
mod pages;
mod router;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        // Headless: warnings go to stderr so stdout stays pipeable
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "showcase=warn".into()))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        cli::handle_command(&cli)?;
        return Ok(());
    }

    Config::ensure_config_exists();
    let mut config = Config::from_env();

    // Command-line flags beat env and file
    if let Some(route) = &cli.route {
        config.start_route = route.clone();
    }
    if cli.dark {
        config.dark_mode = true;
    }

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, &log_buffer);

    tracing::info!(
        version = config::VERSION,
        route = %config.start_route,
        dark = config.dark_mode,
        "Starting showcase"
    );

    let result = tui::run(config, log_buffer).await;

    tracing::info!("Shutting down");
    result
}

/// Install the global subscriber for TUI mode
///
/// Nothing may write to stdout/stderr while the alternate screen is up, so
/// the only sinks are the in-memory buffer and the optional JSON file. The
/// returned guard flushes the file writer and must live until exit.
fn init_tracing(logging: &LoggingConfig, buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("showcase={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = match open_log_file(logging) {
        Some((writer, guard)) => (
            Some(fmt::layer().json().with_writer(writer).with_ansi(false)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(buffer.clone()))
        .with(file_layer)
        .init();

    guard
}

fn open_log_file(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    // Can't log yet; the subscriber isn't installed. Fall back to no file.
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: could not create log dir {}: {}",
            logging.file_dir.display(),
            e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    Some(tracing_appender::non_blocking(appender))
}
