//! Binary crate for the `wa` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Dispatching to key storage or the weather lookup
//! - Human-friendly table output

use clap::Parser;
use std::{io, process::ExitCode};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use wa_core::{KeyStore, OpenWeatherClient};

mod cli;
mod table;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    let store = KeyStore::from_home()
        .inspect_err(|err| warn!(error = %err, "key store unavailable"))
        .ok();
    let client = OpenWeatherClient::new();

    let outcome = cmd.run(store.as_ref(), &client, &mut io::stdout().lock()).await?;
    Ok(outcome.into())
}
