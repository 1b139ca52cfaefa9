use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pit_core::{IncomeMode, TaxRequest};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::settings::Settings;
use crate::utils::parse_decimal;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal income tax calculator for comprehensive income.
///
/// Applies the 60,000 yearly standard deduction and the progressive
/// comprehensive income brackets. With --monthly, income, social insurance
/// and additional deductions are read as monthly amounts and the breakdown
/// is shown per month.
#[derive(Debug, Parser)]
#[command(name = "pit", version, about, long_about = None)]
pub struct Cli {
    /// Income amount; monthly with --monthly, otherwise annual
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub income: Decimal,

    /// Read income, social insurance and deductions as monthly amounts
    #[arg(short, long, conflicts_with = "annual")]
    pub monthly: bool,

    /// Read amounts as annual, overriding a monthly default from the settings file
    #[arg(short, long)]
    pub annual: bool,

    /// Additional deductions besides social insurance and the standard deduction
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub deductions: Option<Decimal>,

    /// Social insurance and housing fund contributions
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub social_insurance: Option<Decimal>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML settings file with default values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable breakdown
    #[default]
    Text,
    /// One CSV header row followed by one data row
    Csv,
}

impl Cli {
    pub fn mode(
        &self,
        settings: &Settings,
    ) -> IncomeMode {
        if self.monthly || (settings.defaults.monthly && !self.annual) {
            IncomeMode::Monthly
        } else {
            IncomeMode::Annual
        }
    }

    pub fn output_format(
        &self,
        settings: &Settings,
    ) -> OutputFormat {
        self.format.unwrap_or(settings.defaults.format)
    }

    /// Builds the request, filling missing amounts from `settings`.
    pub fn request(
        &self,
        settings: &Settings,
    ) -> TaxRequest {
        TaxRequest {
            income: self.income,
            additional_deductions: self.deductions.unwrap_or(settings.defaults.deductions),
            social_insurance: self
                .social_insurance
                .unwrap_or(settings.defaults.social_insurance),
            mode: self.mode(settings),
        }
    }

    /// Filter directive for the logger; `None` defers to `RUST_LOG`.
    pub fn log_directive<'a>(
        &self,
        settings: &'a Settings,
    ) -> Option<&'a str> {
        if self.verbose {
            Some("debug")
        } else {
            settings.logging.level.as_deref()
        }
    }
}
