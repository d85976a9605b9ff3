mod app;
mod config;
mod error;
mod events;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;

/// A terminal spinner wheel for picking a random name.
///
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the configuration directory
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::new();
    config.load(cli.config.as_deref())?;
    App::start(config)
}
