//! Currency formatting for report columns

/// Shown in place of a value too large for `f64`
pub const OVERFLOW_TEXT: &str = "overflow";

/// Round to whole cents, halves away from zero
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount with a leading currency symbol and two decimals
///
/// Negative amounts render as `-$12.34`. Values that round to zero never
/// carry a minus sign. Infinite or NaN amounts render as [`OVERFLOW_TEXT`].
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = round_cents(amount.abs());
    if !cents.is_finite() {
        return OVERFLOW_TEXT.to_string();
    }
    if amount < 0.0 && cents != 0.0 {
        format!("-{}{:.2}", symbol, cents)
    } else {
        format!("{}{:.2}", symbol, cents)
    }
}

/// Currency value right-aligned in a column of `width` characters
pub fn currency_cell(amount: f64, symbol: &str, width: usize) -> String {
    format!("{:>width$}", format_currency(amount, symbol), width = width)
}
