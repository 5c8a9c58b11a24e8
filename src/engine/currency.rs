//! Locale-aware currency parsing and formatting

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Separators, symbol and precision for currency fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyLocale {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub precision: u32,
}

impl Default for CurrencyLocale {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            grouping_separator: '.',
            precision: 2,
        }
    }
}

impl CurrencyLocale {
    /// Parse an amount from arbitrary input.
    ///
    /// Only ASCII digits and the first decimal separator are significant; a
    /// `-` seen before the first digit makes the amount negative. Returns
    /// `None` when there are no digits or the amount is out of range.
    pub fn parse(&self, raw: &str) -> Option<Decimal> {
        let mut integer = String::new();
        let mut fraction = String::new();
        let mut negative = false;
        let mut seen_decimal = false;

        for c in raw.chars() {
            if c.is_ascii_digit() {
                if seen_decimal {
                    fraction.push(c);
                } else {
                    integer.push(c);
                }
            } else if c == self.decimal_separator {
                seen_decimal = true;
            } else if c == '-' && integer.is_empty() && fraction.is_empty() {
                negative = true;
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let literal = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if integer.is_empty() { "0" } else { &integer },
            if fraction.is_empty() { "0" } else { &fraction },
        );
        let amount = Decimal::from_str(&literal).ok()?;
        Some(amount.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Canonical text for an amount: grouped integer part, fixed precision
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.*}", self.precision as usize, rounded.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(c);
        }
        if self.precision > 0 {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    /// Reparse and reformat. Input without an amount becomes empty.
    pub fn normalize(&self, raw: &str) -> String {
        self.parse(raw)
            .map(|amount| self.format(amount))
            .unwrap_or_default()
    }

    /// Whether blur should clear the value: no amount, or a zero amount
    pub fn clears_on_blur(&self, raw: &str) -> bool {
        self.parse(raw).map_or(true, |amount| amount.is_zero())
    }

    /// Stored value with the currency symbol, for display
    pub fn display(&self, stored: &str) -> String {
        if stored.is_empty() {
            String::new()
        } else {
            format!("{} {}", self.symbol, stored)
        }
    }
}
