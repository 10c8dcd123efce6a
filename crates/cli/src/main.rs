use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::Command;
use config::{CliConfig, NAMESPACE_ENV};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Uuid(#[from] rfc_uuid::UuidError),
    #[error("invalid hex input: {0}")]
    InvalidHex(hex::FromHexError),
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "ruuid")]
#[command(about = "Generate, parse and re-encode RFC 9562 UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Entry point for the `ruuid` CLI.
///
/// # Environment Variables
/// - `RUUID_NAMESPACE`: default namespace for `v5` (default: `dns`)
/// - `RUST_LOG`: log filter (default: `ruuid=info`); logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("ruuid=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env_value(std::env::var(NAMESPACE_ENV).ok())?;
    tracing::debug!(namespace = %config.default_namespace(), "resolved configuration");

    match commands::run(&cli.command, &config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e.into())
        }
    }
}
