//! Airgead Banking - compound growth projections for savings accounts
//!
//! This library provides:
//! - Month-by-month projection of a balance under a fixed annual rate
//! - Year-end summaries of balance and interest earned
//! - Side-by-side baseline (no deposit) and contribution scenarios
//! - Terminal tables, CSV and JSON export
//! - An interactive shell that drives repeated calculations

pub mod error;
pub mod investment;
pub mod projection;
pub mod scenario;
pub mod report;
pub mod shell;

// Re-export commonly used types
pub use error::{ExportError, InputError, ProjectionError};
pub use investment::InvestmentParameters;
pub use projection::{project, MonthlyEntry, Projection, ProjectionEngine, YearSummary};
pub use report::ReportConfig;
pub use scenario::{ScenarioComparison, ScenarioRunner};
