// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use count_values::{app, args::Args, config::Config};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    config.validate()?;

    let stdout = std::io::stdout().lock();
    app::run(&config, stdout)?;
    Ok(())
}

/// `RUST_LOG` で詳細度を指定 (既定: warn)。ログは stderr に出力する。
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
