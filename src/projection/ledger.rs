//! Ledger output structures for projections

use serde::{Deserialize, Serialize};

/// One simulated month of account activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEntry {
    /// Projection month (1-indexed)
    pub month: u64,
    pub opening_balance: f64,
    pub deposited_amount: f64,
    /// Opening balance plus deposit, the amount interest is earned on
    pub subtotal: f64,
    pub interest_earned: f64,
    pub closing_balance: f64,
}

impl MonthlyEntry {
    /// Build an entry from the month's opening balance, deposit and rate
    pub fn compute(month: u64, opening_balance: f64, deposit: f64, monthly_rate: f64) -> Self {
        let subtotal = opening_balance + deposit;
        let interest_earned = subtotal * monthly_rate;
        Self {
            month,
            opening_balance,
            deposited_amount: deposit,
            subtotal,
            interest_earned,
            closing_balance: subtotal + interest_earned,
        }
    }
}

/// Summary of one completed 12-month block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Position of the block in the output (0-based)
    pub year_index: u32,
    /// Closing balance of the block's last month
    pub year_end_balance: f64,
    /// Interest earned across the block's 12 months
    pub year_end_interest: f64,
}

/// Complete projection result for one deposit scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Monthly deposit the projection was run with
    pub monthly_deposit: f64,

    /// Monthly ledger rows
    pub monthly: Vec<MonthlyEntry>,

    /// Year-end summaries
    pub yearly: Vec<YearSummary>,
}

impl Projection {
    pub fn new(monthly_deposit: f64) -> Self {
        Self {
            monthly_deposit,
            monthly: Vec::new(),
            yearly: Vec::new(),
        }
    }

    /// Pre-size the output buffers for a known horizon
    pub fn with_capacity(monthly_deposit: f64, months: usize) -> Self {
        Self {
            monthly_deposit,
            monthly: Vec::with_capacity(months),
            yearly: Vec::with_capacity(months / 12),
        }
    }

    /// Add a monthly ledger row
    pub fn add_month(&mut self, entry: MonthlyEntry) {
        self.monthly.push(entry);
    }

    /// Add a year-end summary
    pub fn add_year(&mut self, summary: YearSummary) {
        self.yearly.push(summary);
    }

    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }

    /// Balance after the last simulated month, or 0 for an empty projection
    pub fn final_balance(&self) -> f64 {
        self.monthly.last().map(|e| e.closing_balance).unwrap_or(0.0)
    }

    pub fn total_deposits(&self) -> f64 {
        self.monthly.iter().map(|e| e.deposited_amount).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.monthly.iter().map(|e| e.interest_earned).sum()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            total_months: self.monthly.len() as u64,
            total_years: self.yearly.len() as u32,
            starting_balance: self.monthly.first().map(|e| e.opening_balance).unwrap_or(0.0),
            total_deposits: self.total_deposits(),
            total_interest: self.total_interest(),
            final_balance: self.final_balance(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u64,
    pub total_years: u32,
    pub starting_balance: f64,
    pub total_deposits: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}
