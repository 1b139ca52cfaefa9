use std::io::Write;

use anyhow::{Context, Result};
use pit_core::TaxBreakdown;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::report::write_report;
use crate::settings::Settings;

/// Loads the settings file named on the command line, if any.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings: {}", path.display())),
        None => Ok(Settings::default()),
    }
}

/// Evaluates the request described by `cli` and writes the report to `out`.
pub fn run<W: Write>(
    cli: &Cli,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let request = cli.request(settings);
    debug!(?request, "built request");

    let breakdown = TaxBreakdown::calculate(&request).context("Failed to calculate tax")?;
    info!(
        mode = %breakdown.mode(),
        taxable_income = %breakdown.result().taxable_income,
        tax_due = %breakdown.result().tax_due,
        "calculated tax"
    );

    write_report(&breakdown, cli.output_format(settings), out)?;
    out.flush().context("Failed to flush output")
}
