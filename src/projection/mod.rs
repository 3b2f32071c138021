//! Projection engine for monthly compound growth with recurring deposits

mod state;
mod engine;
mod ledger;

pub use state::AccountState;
pub use engine::{project, ProjectionEngine};
pub use ledger::{MonthlyEntry, Projection, ProjectionSummary, YearSummary};
