//! CSV and JSON export of projection results

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::ExportError;
use crate::projection::MonthlyEntry;
use crate::scenario::ScenarioComparison;

/// Write the monthly ledger as CSV, one row per month
pub fn write_monthly_csv<W: Write>(writer: W, months: &[MonthlyEntry]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in months {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}

/// One year-end summary tagged with the scenario it belongs to
#[derive(Debug, Serialize)]
struct ScenarioYearRow<'a> {
    scenario: &'a str,
    year_index: u32,
    year_end_balance: f64,
    year_end_interest: f64,
}

/// Write the year-end summaries of both scenarios as CSV, baseline first
pub fn write_yearly_csv<W: Write>(
    writer: W,
    comparison: &ScenarioComparison,
) -> Result<(), ExportError> {
    let scenarios = [
        ("baseline", &comparison.baseline.yearly),
        ("contribution", &comparison.contribution.yearly),
    ];

    let mut wtr = csv::Writer::from_writer(writer);
    for (scenario, years) in scenarios {
        for year in years.iter() {
            wtr.serialize(ScenarioYearRow {
                scenario,
                year_index: year.year_index,
                year_end_balance: year.year_end_balance,
                year_end_interest: year.year_end_interest,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save the contribution scenario's monthly ledger to a CSV file
pub fn save_monthly_csv(path: &Path, comparison: &ScenarioComparison) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_monthly_csv(file, &comparison.contribution.monthly)?;
    info!(
        "wrote {} monthly rows to {}",
        comparison.contribution.monthly.len(),
        path.display()
    );
    Ok(())
}

/// Save the year-end summaries of both scenarios to a CSV file
pub fn save_yearly_csv(path: &Path, comparison: &ScenarioComparison) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_yearly_csv(file, comparison)?;
    info!(
        "wrote {} year-end rows to {}",
        comparison.baseline.yearly.len() + comparison.contribution.yearly.len(),
        path.display()
    );
    Ok(())
}

/// Write both scenarios as pretty-printed JSON
pub fn write_json<W: Write>(
    mut writer: W,
    comparison: &ScenarioComparison,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, comparison)?;
    writeln!(writer)?;
    Ok(())
}
