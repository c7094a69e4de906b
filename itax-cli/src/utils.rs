use itax_core::Regime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line amount cannot be used.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must not be negative, got '{0}'")]
    Negative(String),
}

/// Trims whitespace and drops digit-grouping commas, so both `12,00,000`
/// and `1,200,000` read as the same figure.
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a rupee amount. Empty input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if value < Decimal::ZERO {
        return Err(ParseAmountError::Negative(s.to_string()));
    }
    Ok(value)
}

pub fn parse_regime(s: &str) -> Result<Regime, String> {
    Regime::parse(s).ok_or_else(|| format!("unknown regime '{s}', expected 'old' or 'new'"))
}
