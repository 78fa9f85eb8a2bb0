//! Currency display
//!
//! US conventions: comma thousands separators, exactly two fraction digits,
//! minus sign ahead of the symbol.

use super::display_value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self { symbol: "$".to_string() }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    /// Format an amount, showing non-finite values as zero.
    ///
    /// Amounts that round to zero cents never carry a minus sign.
    pub fn format(&self, value: f64) -> String {
        let value = display_value(value);
        // `as` saturates, so absurdly large amounts clamp instead of wrapping
        let cents = (value.abs() * 100.0).round() as u64;
        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        format!(
            "{sign}{}{}.{:02}",
            self.symbol,
            group_thousands(cents / 100),
            cents % 100
        )
    }
}

/// Format with the default `$` symbol
pub fn format_currency(value: f64) -> String {
    CurrencyFormat::default().format(value)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
