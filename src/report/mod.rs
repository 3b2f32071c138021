//! Report rendering and export
//!
//! Currency values are rounded to cents here and nowhere else.

mod format;
mod tables;
pub mod export;

pub use format::{currency_cell, format_currency, round_cents, OVERFLOW_TEXT};
pub use tables::{
    write_confirmation, write_header_box, write_monthly_report, write_year_end_report,
    BASELINE_TITLE, CONTRIBUTION_TITLE, MONTHLY_TITLE,
};

use std::env;

/// Environment variable overriding the default currency symbol
pub const CURRENCY_ENV_VAR: &str = "AIRGEAD_CURRENCY";

/// Default currency symbol
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// ANSI sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Presentation settings shared by the shell and the one-shot CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Symbol printed before every currency value
    pub currency_symbol: String,

    /// Whether to clear the terminal between screens
    pub clear_screen: bool,
}

impl ReportConfig {
    /// Defaults, with the currency symbol taken from `AIRGEAD_CURRENCY` when set
    pub fn from_env() -> Self {
        let currency_symbol = env::var(CURRENCY_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        Self {
            currency_symbol,
            ..Self::default()
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            clear_screen: true,
        }
    }
}
