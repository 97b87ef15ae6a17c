//! nobg - turn near-black pixels of an image transparent.

mod cli;
mod config;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::NobgConfig;
use std::{
    io::{self, Write},
    path::Path,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let settings = NobgConfig::load(&cli)?;
    debug!("config"; "input={} output={} threshold={}",
        settings.input.display(), settings.output.display(), settings.threshold);

    let report = image::background::remove_near_black_background(
        &settings.input,
        &settings.output,
        settings.threshold,
    )?;
    debug!("nobg"; "{}x{} pixels, {} made transparent",
        report.width, report.height, report.converted);

    report_saved(&mut io::stdout().lock(), &settings.output)?;
    Ok(())
}

/// Write the confirmation line for a finished run.
fn report_saved(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "Saved transparent image to {}", path.display())
}
