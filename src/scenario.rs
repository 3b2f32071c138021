//! Scenario runner for the baseline and contribution projections
//!
//! Every calculation cycle projects the same parameters twice: once without
//! deposits and once with the recurring deposit. The result is returned as an
//! owned [`ScenarioComparison`] that the caller hands to reporting.

use log::info;
use serde::{Deserialize, Serialize};

use crate::investment::InvestmentParameters;
use crate::projection::{Projection, ProjectionEngine};

/// Runs both deposit scenarios for one parameter set
///
/// # Example
/// ```ignore
/// let params = InvestmentParameters::new(1000.0, 100.0, 4.5, 5)?;
/// let comparison = ScenarioRunner::new(params).run();
/// println!("{:.2}", comparison.deposit_gain());
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(params: InvestmentParameters) -> Self {
        Self {
            engine: ProjectionEngine::new(params),
        }
    }

    pub fn params(&self) -> &InvestmentParameters {
        self.engine.params()
    }

    /// Projection without recurring deposits
    pub fn run_baseline(&self) -> Projection {
        self.engine.project_baseline()
    }

    /// Projection with the parameters' recurring deposit
    pub fn run_contribution(&self) -> Projection {
        self.engine.project_contribution()
    }

    /// Run both scenarios
    ///
    /// The projections share no state, so they run in parallel.
    pub fn run(&self) -> ScenarioComparison {
        let (baseline, contribution) =
            rayon::join(|| self.run_baseline(), || self.run_contribution());

        let comparison = ScenarioComparison {
            params: *self.params(),
            baseline,
            contribution,
        };

        info!(
            "{} year projection: baseline {:.2}, with deposits {:.2}",
            comparison.params.years,
            comparison.baseline.final_balance(),
            comparison.contribution.final_balance()
        );

        comparison
    }
}

/// Both scenario results for one calculation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub params: InvestmentParameters,
    pub baseline: Projection,
    pub contribution: Projection,
}

impl ScenarioComparison {
    /// Extra final balance attributable to the recurring deposits
    pub fn deposit_gain(&self) -> f64 {
        self.contribution.final_balance() - self.baseline.final_balance()
    }

    /// Interest earned on the deposits themselves (beyond the baseline interest)
    pub fn deposit_interest(&self) -> f64 {
        self.contribution.total_interest() - self.baseline.total_interest()
    }
}
