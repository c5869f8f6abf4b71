pub mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mget")]
#[command(about = "Fetch many URLs concurrently and report each outcome", long_about = None)]
pub struct Cli {
    /// URLs to fetch
    pub urls: Vec<String>,

    /// Read additional URLs from a file, one per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Use this config file instead of ~/.config/mget/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Save each successful body into this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
