//! Investment parameters for a single projection run

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Upper bound on the horizon
pub const MAX_YEARS: u32 = 1_000;

/// Upper bound on the initial amount and the monthly deposit
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Upper bound on the annual rate, in percent
pub const MAX_RATE_PERCENT: f64 = 1_000.0;

/// Months in a projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Inputs for one projection run
///
/// Built fresh from validated input for every calculation cycle and never
/// mutated afterwards. Fields are public so the engine can be driven with
/// any values; use [`InvestmentParameters::new`] for checked construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Starting account balance
    pub initial_amount: f64,

    /// Recurring deposit made at the start of every month
    pub monthly_deposit: f64,

    /// Annual interest rate as a percentage (5.0 = 5%)
    pub annual_rate_percent: f64,

    /// Projection horizon in whole years
    pub years: u32,
}

impl InvestmentParameters {
    /// Create parameters, rejecting negative, non-finite or out-of-range
    /// values and a horizon outside `1..=MAX_YEARS`
    pub fn new(
        initial_amount: f64,
        monthly_deposit: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Result<Self, ProjectionError> {
        check_amount("initial_amount", initial_amount, MAX_AMOUNT)?;
        check_amount("monthly_deposit", monthly_deposit, MAX_AMOUNT)?;
        check_amount("annual_rate_percent", annual_rate_percent, MAX_RATE_PERCENT)?;

        if years == 0 {
            return Err(ProjectionError::InvalidArgument {
                field: "years",
                reason: "must be a positive number of years".to_string(),
            });
        }
        if years > MAX_YEARS {
            return Err(ProjectionError::InvalidArgument {
                field: "years",
                reason: format!("{} exceeds the maximum of {} years", years, MAX_YEARS),
            });
        }

        Ok(Self {
            initial_amount,
            monthly_deposit,
            annual_rate_percent,
            years,
        })
    }

    /// Monthly interest rate as a decimal: annual percent / 100 / 12
    pub fn monthly_rate(&self) -> f64 {
        (self.annual_rate_percent / 100.0) / MONTHS_PER_YEAR as f64
    }

    /// Number of simulated months
    ///
    /// Widened to `u64` so any `u32` year count is representable.
    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * u64::from(MONTHS_PER_YEAR)
    }

    /// Copy of these parameters with a different monthly deposit
    pub fn with_deposit(&self, monthly_deposit: f64) -> Self {
        Self {
            monthly_deposit,
            ..*self
        }
    }
}

fn check_amount(field: &'static str, value: f64, max: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::InvalidArgument {
            field,
            reason: format!("{} is not a finite number", value),
        });
    }
    if value < 0.0 {
        return Err(ProjectionError::InvalidArgument {
            field,
            reason: format!("{} is negative", value),
        });
    }
    if value > max {
        return Err(ProjectionError::InvalidArgument {
            field,
            reason: format!("{} exceeds the maximum of {}", value, max),
        });
    }
    Ok(())
}
