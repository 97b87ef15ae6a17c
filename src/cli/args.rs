//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Turn near-black pixels of an image transparent.
///
/// The image pair and threshold come from `nobg.toml` when present,
/// otherwise from built-in defaults.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nobg.toml, optional)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print resolved settings and pixel statistics
    #[arg(short, long)]
    pub verbose: bool,
}
