//! Card asset generator.
//!
//! Reads a markdown listing of card images and writes the JSON asset file
//! the game bot loads at startup.

pub mod commands;
pub mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Cli, Commands};

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Build(args) => {
            tracing::debug!("Build command: {:?}", args);
            let json = commands::build::execute(&args)?;
            if !args.quiet {
                println!("{json}");
            }
        }
        Commands::Show(args) => {
            tracing::debug!("Show command: {:?}", args);
            for line in commands::show::execute(&args)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
