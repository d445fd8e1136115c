//! CLI argument parsing and startup helpers.

use crate::ServerConfig;
use clap::Parser;
use std::time::Duration;

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "Nameforge",
    about = "Deterministic seeded app-name generation service"
)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "7420")]
    pub port: u16,

    /// Artificial delay in milliseconds applied before generation responses
    #[arg(long, default_value = "0")]
    pub delay_ms: u64,

    /// Disable per-IP rate limiting on generation endpoints
    #[arg(long)]
    pub no_rate_limit: bool,

    /// Log output format
    #[arg(short, long, default_value = "pretty")]
    pub log_format: LogFormat,
}

/// Initialize logging based on the specified format.
pub fn init_logging(format: &LogFormat) {
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt::init(),
        LogFormat::Json => tracing_subscriber::fmt().json().init(),
        LogFormat::Compact => tracing_subscriber::fmt().compact().init(),
    }
}

/// Build ServerConfig from parsed arguments.
pub fn build_config(args: &Args) -> ServerConfig {
    ServerConfig {
        delay: Duration::from_millis(args.delay_ms),
        rate_limit: !args.no_rate_limit,
    }
}
