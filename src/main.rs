use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mget::app::AppContext;
use mget::cli::{commands, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("mget: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<usize> {
    let ctx = AppContext::new(cli.config.as_deref()).context("Failed to set up mget")?;
    let failed = commands::fetch(&ctx, cli).await?;
    Ok(failed)
}
