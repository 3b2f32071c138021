//! Running account state during a projection

use crate::investment::{InvestmentParameters, MONTHS_PER_YEAR};

/// State of the account between simulated months
#[derive(Debug, Clone)]
pub struct AccountState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u64,

    /// Balance carried into the next month
    pub balance: f64,

    /// Interest accumulated since the last year-end
    pub ytd_interest: f64,
}

impl AccountState {
    /// Initialize state at projection start
    pub fn from_params(params: &InvestmentParameters) -> Self {
        Self {
            month: 0,
            balance: params.initial_amount,
            ytd_interest: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Whether the current month closes a 12-month block
    pub fn is_year_end(&self) -> bool {
        self.month > 0 && self.month % u64::from(MONTHS_PER_YEAR) == 0
    }

    /// 0-based index of the year containing the current month
    ///
    /// Months are bounded by `u32::MAX` years, so the index fits a `u32`.
    pub fn year_index(&self) -> u32 {
        (self.month.saturating_sub(1) / u64::from(MONTHS_PER_YEAR)) as u32
    }

    /// Clear the year-to-date interest after a year-end summary is emitted
    pub fn reset_year(&mut self) {
        self.ytd_interest = 0.0;
    }
}
