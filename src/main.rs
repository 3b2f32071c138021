//! Airgead Banking CLI
//!
//! Usage:
//!   airgead                                                   Interactive session
//!   airgead --initial 1000 --deposit 100 --rate 4.5 --years 5 One-shot report
//!   airgead ... --monthly --csv ledger.csv                    Include monthly breakdown
//!   airgead ... --yearly-csv years.csv                        Export year-end summaries
//!   airgead ... --json                                        Machine-readable output

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use airgead_banking::report::{self, export, ReportConfig};
use airgead_banking::shell::Shell;
use airgead_banking::{InvestmentParameters, ScenarioRunner};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise --verbose selects debug and the default stays quiet
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let config = cli.report_config();

    match cli.parameters()? {
        Some(params) => {
            let stdout = io::stdout();
            run_once(&cli, &params, &config, &mut stdout.lock())
        }
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
            shell.run()?;
            Ok(())
        }
    }
}

/// Project one parameter set and print or export the results
fn run_once<W: Write>(
    cli: &Cli,
    params: &InvestmentParameters,
    config: &ReportConfig,
    out: &mut W,
) -> Result<()> {
    let comparison = ScenarioRunner::new(*params).run();

    if cli.json {
        export::write_json(&mut *out, &comparison).context("Failed to write JSON output")?;
    } else {
        report::write_confirmation(out, params, config)?;
        report::write_year_end_report(
            out,
            report::BASELINE_TITLE,
            &comparison.baseline.yearly,
            config,
        )?;
        report::write_year_end_report(
            out,
            report::CONTRIBUTION_TITLE,
            &comparison.contribution.yearly,
            config,
        )?;
        if cli.monthly {
            report::write_monthly_report(out, &comparison.contribution.monthly, config)?;
        }
    }

    if let Some(path) = &cli.csv {
        export::save_monthly_csv(path, &comparison)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !cli.json {
            writeln!(out, "\nMonthly breakdown written to: {}", path.display())?;
        }
    }

    if let Some(path) = &cli.yearly_csv {
        export::save_yearly_csv(path, &comparison)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !cli.json {
            writeln!(out, "\nYear-end summaries written to: {}", path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use airgead_banking::ScenarioComparison;

    const PARAMS: [&str; 8] = [
        "--initial", "1000", "--deposit", "100", "--rate", "4.5", "--years", "2",
    ];

    fn run(extra: &[&str]) -> Result<String> {
        let args = std::iter::once("airgead")
            .chain(PARAMS.iter().copied())
            .chain(extra.iter().copied());
        let cli = Cli::try_parse_from(args)?;
        let params = cli.parameters()?.context("parameters were given")?;
        let config = ReportConfig {
            clear_screen: false,
            ..cli.report_config()
        };

        let mut out = Vec::new();
        run_once(&cli, &params, &config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("airgead_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_tables_by_default() {
        let text = run(&["--currency", "$"]).unwrap();

        assert!(text.contains("Initial Investment Amount: $1000.00"));
        assert!(text.contains(report::BASELINE_TITLE));
        assert!(text.contains(report::CONTRIBUTION_TITLE));
        assert!(text.contains("$1045.94"));
        assert!(!text.contains(&format!("*** {} ***", report::MONTHLY_TITLE)));
    }

    #[test]
    fn test_monthly_flag_adds_breakdown() {
        let text = run(&["--monthly", "--currency", "$"]).unwrap();

        assert!(text.contains(&format!("*** {} ***", report::MONTHLY_TITLE)));
        assert!(text.contains("$1104.13"));
    }

    #[test]
    fn test_json_replaces_tables() {
        let text = run(&["--json", "--monthly"]).unwrap();

        let parsed: ScenarioComparison = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.params.years, 2);
        assert_eq!(parsed.contribution.monthly.len(), 24);
        assert_eq!(parsed.baseline.yearly.len(), 2);
        assert!(!text.contains(report::BASELINE_TITLE));
    }

    #[test]
    fn test_csv_exports() {
        let monthly = temp_path("run_monthly.csv");
        let yearly = temp_path("run_yearly.csv");
        let text = run(&[
            "--csv",
            monthly.to_str().unwrap(),
            "--yearly-csv",
            yearly.to_str().unwrap(),
        ])
        .unwrap();

        let monthly_text = std::fs::read_to_string(&monthly).unwrap();
        let yearly_text = std::fs::read_to_string(&yearly).unwrap();
        std::fs::remove_file(&monthly).unwrap();
        std::fs::remove_file(&yearly).unwrap();

        assert!(text.contains(&format!("Monthly breakdown written to: {}", monthly.display())));
        assert!(text.contains(&format!("Year-end summaries written to: {}", yearly.display())));
        assert_eq!(monthly_text.lines().count(), 25);
        assert_eq!(yearly_text.lines().count(), 5);
    }

    #[test]
    fn test_json_keeps_stdout_clean_when_exporting() {
        let monthly = temp_path("json_monthly.csv");
        let text = run(&["--json", "--csv", monthly.to_str().unwrap()]).unwrap();
        std::fs::remove_file(&monthly).unwrap();

        assert!(!text.contains("written to"));
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }

    #[test]
    fn test_unwritable_csv_path_is_error() {
        let path = std::env::temp_dir().join("airgead_no_such_dir").join("out.csv");
        let err = run(&["--csv", path.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
