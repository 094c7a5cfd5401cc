//! Command-line configuration.
//!
//! Every path can also come from the environment (or a `.env` file in the
//! working directory). Defaults match the layout of the game bot repo, where
//! the tool runs from `script/` and writes `../src/asset.json`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_SOURCE: &str = "./source.md";
pub const DEFAULT_OUTPUT: &str = "../src/asset.json";

#[derive(Debug, Parser)]
#[command(name = "asset-gen", version, about = "Generate card asset manifests from markdown")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse the markdown listing and write the JSON asset file
    Build(BuildArgs),
    /// Print every card of an existing manifest
    Show(ShowArgs),
}

/// Shape of the generated JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `{ "meta": ..., "cards": [...] }`
    #[default]
    Manifest,
    /// Bare card array
    Cards,
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Markdown file listing the card images
    #[arg(long, env = "ASSET_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// JSON file to write
    #[arg(long, env = "ASSET_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(long, value_enum, env = "ASSET_FORMAT", default_value_t = OutputFormat::Manifest)]
    pub format: OutputFormat,

    /// Do not echo the generated JSON on stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Manifest to read
    #[arg(long, env = "ASSET_MANIFEST", default_value = DEFAULT_OUTPUT)]
    pub manifest: PathBuf,
}

impl Cli {
    /// Log filter implied by `-v` flags, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
