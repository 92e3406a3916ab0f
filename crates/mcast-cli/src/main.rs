use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use mcast_core::{McastCacheKey, McastError};
use tracing_subscriber::EnvFilter;

/// Inspect multicast event cache keys.
#[derive(Debug, Parser)]
#[command(name = "mcast-cli", version)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, env = "MCAST_FORMAT", default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a key and print its rendering and hash code.
    Key {
        /// Multicast group address, e.g. 239.1.1.1
        group: String,
        /// Sink connect point, e.g. of:0000000000000001/3
        sink: String,
    },
    /// Build two keys and report whether they address the same entry.
    Compare {
        group_a: String,
        sink_a: String,
        group_b: String,
        sink_b: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Key(#[from] McastError),

    #[error("json encode: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::Key { group, sink } => {
            let key = McastCacheKey::parse(group, sink)?;
            tracing::debug!(%key, "built key");
            render_key(&key, cli.format)
        }
        Command::Compare {
            group_a,
            sink_a,
            group_b,
            sink_b,
        } => {
            let a = McastCacheKey::parse(group_a, sink_a)?;
            let b = McastCacheKey::parse(group_b, sink_b)?;
            render_compare(&a, &b, cli.format)
        }
    }
}

fn render_key(key: &McastCacheKey, format: Format) -> Result<String, CliError> {
    match format {
        Format::Text => Ok(format!("{key}\nhash_code={:#018x}", key.hash_code())),
        Format::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "key": key,
            "hash_code": key.hash_code(),
        }))?),
    }
}

fn render_compare(a: &McastCacheKey, b: &McastCacheKey, format: Format) -> Result<String, CliError> {
    let equal = a == b;
    match format {
        Format::Text => Ok(format!(
            "equal={equal}\na: {a} hash_code={:#018x}\nb: {b} hash_code={:#018x}",
            a.hash_code(),
            b.hash_code()
        )),
        Format::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "equal": equal,
            "a": { "key": a, "hash_code": a.hash_code() },
            "b": { "key": b, "hash_code": b.hash_code() },
        }))?),
    }
}
