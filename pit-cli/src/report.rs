//! Renders a [`TaxBreakdown`] as text or CSV.

use std::io::Write;

use anyhow::{Context, Result};
use pit_core::{IncomeMode, TaxBreakdown, TaxSummary};

use crate::cli::OutputFormat;
use crate::utils::{format_amount, format_rate};

/// Currency all amounts are expressed in.
pub const CURRENCY: &str = "RMB";

pub fn write_report<W: Write>(
    breakdown: &TaxBreakdown,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let summary = breakdown.summary();
    match format {
        OutputFormat::Text => write_text(&summary, out),
        OutputFormat::Csv => write_csv(&summary, out),
    }
}

fn text_lines(summary: &TaxSummary) -> Vec<(&'static str, String)> {
    match summary.mode {
        IncomeMode::Annual => vec![
            ("Gross annual income", format_amount(summary.gross_income)),
            (
                "Annual deductions (incl. social insurance)",
                format_amount(summary.total_deductions),
            ),
            ("Taxable income", format_amount(summary.taxable_income)),
            ("Tax rate", format_rate(summary.tax_rate)),
            ("Quick deduction", format_amount(summary.quick_deduction)),
            ("Tax due", format_amount(summary.tax_due)),
            ("Net income", format_amount(summary.net_income)),
        ],
        IncomeMode::Monthly => vec![
            ("Gross monthly income", format_amount(summary.gross_income)),
            (
                "Monthly social insurance",
                format_amount(summary.social_insurance),
            ),
            (
                "Monthly additional deductions",
                format_amount(summary.additional_deductions),
            ),
            (
                "Monthly taxable income",
                format_amount(summary.taxable_income),
            ),
            ("Tax rate", format_rate(summary.tax_rate)),
            (
                "Monthly quick deduction",
                format_amount(summary.quick_deduction),
            ),
            ("Monthly tax due", format_amount(summary.tax_due)),
            ("Monthly net income", format_amount(summary.net_income)),
        ],
    }
}

fn write_text<W: Write>(
    summary: &TaxSummary,
    out: &mut W,
) -> Result<()> {
    let heading = match summary.mode {
        IncomeMode::Annual => "Annual mode",
        IncomeMode::Monthly => "Monthly mode",
    };
    writeln!(out, "{heading} (values shown in {CURRENCY}):")?;
    for (label, value) in text_lines(summary) {
        writeln!(out, "  {label}: {value}")?;
    }
    Ok(())
}

fn write_csv<W: Write>(
    summary: &TaxSummary,
    out: &mut W,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .serialize(summary)
        .context("Failed to write CSV record")?;
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pit_core::TaxRequest;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn render(
        request: TaxRequest,
        format: OutputFormat,
    ) -> String {
        let breakdown = TaxBreakdown::calculate(&request).unwrap();
        let mut out = Vec::new();
        write_report(&breakdown, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn annual_text_report() {
        let output = render(TaxRequest::annual(dec!(120000)), OutputFormat::Text);

        assert_eq!(
            output,
            "Annual mode (values shown in RMB):\n\
             \x20 Gross annual income: 120,000.00\n\
             \x20 Annual deductions (incl. social insurance): 0.00\n\
             \x20 Taxable income: 60,000.00\n\
             \x20 Tax rate: 10%\n\
             \x20 Quick deduction: 2,520.00\n\
             \x20 Tax due: 3,480.00\n\
             \x20 Net income: 116,520.00\n"
        );
    }

    #[test]
    fn monthly_text_report() {
        let request = TaxRequest::monthly(dec!(15000))
            .with_social_insurance(dec!(2000))
            .with_deductions(dec!(1000));

        let output = render(request, OutputFormat::Text);

        assert_eq!(
            output,
            "Monthly mode (values shown in RMB):\n\
             \x20 Gross monthly income: 15,000.00\n\
             \x20 Monthly social insurance: 2,000.00\n\
             \x20 Monthly additional deductions: 1,000.00\n\
             \x20 Monthly taxable income: 7,000.00\n\
             \x20 Tax rate: 10%\n\
             \x20 Monthly quick deduction: 210.00\n\
             \x20 Monthly tax due: 490.00\n\
             \x20 Monthly net income: 14,510.00\n"
        );
    }

    #[test]
    fn csv_report_has_header_and_one_row() {
        let request = TaxRequest::annual(dec!(300000)).with_deductions(dec!(50000));

        let output = render(request, OutputFormat::Csv);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "mode,gross_income,social_insurance,additional_deductions,total_deductions,\
                 taxable_income,tax_rate,quick_deduction,tax_due,net_income",
                "annual,300000.00,0.00,50000.00,50000.00,190000.00,0.20,16920.00,21080.00,278920.00",
            ]
        );
    }
}
