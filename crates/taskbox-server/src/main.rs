//! taskbox - multi-tenant todo-list API server
//!
//! Thin CLI entry point; all wiring lives in [`taskbox_server::run`].

use clap::Parser;
use taskbox_server::run;

/// Command line interface for the taskbox API server
#[derive(Parser, Debug)]
#[command(name = "taskbox")]
#[command(about = "Multi-tenant todo-list API server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
