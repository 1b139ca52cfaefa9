use pit_core::calculations::common::{rate_as_percent, round_half_up};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("amount cannot be empty")]
    Empty,
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"120,000.50"`).
/// Empty or whitespace-only input is an error, never an implicit 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        tracing::debug!("empty amount rejected");
        return Err(ParseDecimalError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats an amount with two decimals and comma thousands separators, e.g. `1,234.50`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = format!("{:.2}", round_half_up(value).abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !round_half_up(value).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

/// Formats a rate as a whole percentage, e.g. `0.45` → `45%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate_as_percent(rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,200,000").unwrap(), dec!(1200000));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_keeps_sign() {
        assert_eq!(parse_decimal("-1").unwrap(), dec!(-1));
    }

    #[test]
    fn parse_decimal_rejects_empty() {
        assert!(matches!(parse_decimal(""), Err(ParseDecimalError::Empty)));
        assert!(matches!(parse_decimal("   "), Err(ParseDecimalError::Empty)));
        assert!(matches!(parse_decimal(","), Err(ParseDecimalError::Empty)));
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        let err = parse_decimal("abc").unwrap_err();

        assert!(err.to_string().starts_with("invalid amount 'abc'"));
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(116520)), "116,520.00");
        assert_eq!(format_amount(dec!(999.995)), "1,000.00");
    }

    #[test]
    fn format_amount_small_values() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(5.5)), "5.50");
        assert_eq!(format_amount(dec!(290.001)), "290.00");
    }

    #[test]
    fn format_amount_negative_values() {
        assert_eq!(format_amount(dec!(-2420)), "-2,420.00");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }

    #[test]
    fn format_rate_as_whole_percent() {
        assert_eq!(format_rate(dec!(0.10)), "10%");
        assert_eq!(format_rate(dec!(0.03)), "3%");
    }
}
