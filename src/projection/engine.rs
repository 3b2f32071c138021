//! Core projection engine for monthly compound growth

use log::debug;

use crate::investment::InvestmentParameters;
use super::state::AccountState;
use super::ledger::{MonthlyEntry, Projection, YearSummary};

/// Main projection engine
///
/// Holds one parameter set and projects it under any monthly deposit, so the
/// baseline (no deposit) and contribution scenarios share the same inputs.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: InvestmentParameters,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given parameters
    pub fn new(params: InvestmentParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &InvestmentParameters {
        &self.params
    }

    /// Run the projection with the given monthly deposit
    ///
    /// `monthly_deposit` overrides `params.monthly_deposit`. A zero-year
    /// horizon produces an empty projection. Negative balances, deposits or
    /// rates go through the same formulas without special handling.
    /// Nothing is rounded here; rounding happens only when formatting.
    /// Balances beyond the `f64` range become infinite; reports print them
    /// as `overflow`.
    pub fn project(&self, monthly_deposit: f64) -> Projection {
        let monthly_rate = self.params.monthly_rate();
        let total_months = self.params.total_months();

        // Capacity is a hint; a horizon that does not fit `usize` grows on demand
        let capacity = usize::try_from(total_months).unwrap_or(0);
        let mut result = Projection::with_capacity(monthly_deposit, capacity);
        let mut state = AccountState::from_params(&self.params);

        for _month in 1..=total_months {
            state.advance_month();

            let entry =
                MonthlyEntry::compute(state.month, state.balance, monthly_deposit, monthly_rate);
            state.balance = entry.closing_balance;
            state.ytd_interest += entry.interest_earned;
            result.add_month(entry);

            if state.is_year_end() {
                result.add_year(YearSummary {
                    year_index: state.year_index(),
                    year_end_balance: state.balance,
                    year_end_interest: state.ytd_interest,
                });
                state.reset_year();
            }
        }

        debug!(
            "projected {} months at deposit {:.2}: final balance {:.2}",
            result.monthly.len(),
            monthly_deposit,
            result.final_balance()
        );

        result
    }

    /// Projection with no recurring deposit
    pub fn project_baseline(&self) -> Projection {
        self.project(0.0)
    }

    /// Projection with the deposit from the parameters
    pub fn project_contribution(&self) -> Projection {
        self.project(self.params.monthly_deposit)
    }
}

/// Project `params` with an explicit monthly deposit
pub fn project(params: &InvestmentParameters, monthly_deposit: f64) -> Projection {
    ProjectionEngine::new(*params).project(monthly_deposit)
}
