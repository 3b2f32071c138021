//! CLI argument definitions using clap

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use airgead_banking::{InvestmentParameters, ReportConfig};

/// Airgead Banking - compound growth calculator with monthly deposits
///
/// Without parameters an interactive session starts. Passing --initial,
/// --deposit, --rate and --years runs a single projection and exits.
#[derive(Parser, Debug)]
#[command(name = "airgead")]
#[command(about = "Project savings growth with and without monthly deposits", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial investment amount
    #[arg(long)]
    pub initial: Option<f64>,

    /// Recurring monthly deposit
    #[arg(long)]
    pub deposit: Option<f64>,

    /// Annual interest rate in percent (5 = 5%)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Number of years to project
    #[arg(long)]
    pub years: Option<u32>,

    /// Also print the month-by-month breakdown
    #[arg(long)]
    pub monthly: bool,

    /// Write the monthly breakdown (with deposits) to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the year-end summaries of both scenarios to a CSV file
    #[arg(long, value_name = "PATH")]
    pub yearly_csv: Option<PathBuf>,

    /// Print both scenarios as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Currency symbol (defaults to $AIRGEAD_CURRENCY or "$")
    #[arg(long)]
    pub currency: Option<String>,

    /// Do not clear the terminal between screens
    #[arg(long)]
    pub no_clear: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parameters for a one-shot run, or `None` for an interactive session
    pub fn parameters(&self) -> Result<Option<InvestmentParameters>> {
        match (self.initial, self.deposit, self.rate, self.years) {
            (Some(initial), Some(deposit), Some(rate), Some(years)) => {
                let params = InvestmentParameters::new(initial, deposit, rate, years)
                    .context("Invalid projection parameters")?;
                Ok(Some(params))
            }
            (None, None, None, None) => {
                let wants_report =
                    self.csv.is_some() || self.yearly_csv.is_some() || self.json || self.monthly;
                if wants_report {
                    bail!(
                        "--monthly, --csv, --yearly-csv and --json need \
                         --initial, --deposit, --rate and --years"
                    );
                }
                Ok(None)
            }
            _ => bail!("--initial, --deposit, --rate and --years must be given together"),
        }
    }

    /// Presentation settings from flags, falling back to the environment
    pub fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::from_env();
        if let Some(symbol) = &self.currency {
            config.currency_symbol = symbol.clone();
        }
        config.clear_screen = !self.no_clear;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("airgead").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_is_interactive() {
        let cli = parse(&[]);
        assert!(cli.parameters().unwrap().is_none());
        assert!(cli.report_config().clear_screen);
    }

    #[test]
    fn test_full_parameters() {
        let cli = parse(&[
            "--initial", "1000", "--deposit", "100", "--rate", "4.5", "--years", "5",
        ]);
        let params = cli.parameters().unwrap().unwrap();

        assert_eq!(params.initial_amount, 1000.0);
        assert_eq!(params.monthly_deposit, 100.0);
        assert_eq!(params.annual_rate_percent, 4.5);
        assert_eq!(params.years, 5);
    }

    #[test]
    fn test_partial_parameters_rejected() {
        let cli = parse(&["--initial", "1000", "--years", "5"]);
        assert!(cli.parameters().is_err());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let cli = parse(&[
            "--initial", "1000", "--deposit", "100", "--rate", "4.5", "--years", "0",
        ]);
        assert!(cli.parameters().is_err());

        let cli = parse(&["--initial=-1", "--deposit", "100", "--rate", "4.5", "--years", "2"]);
        assert!(cli.parameters().is_err());
    }

    #[test]
    fn test_years_above_limit_rejected() {
        // Would overflow a u32 month count if it reached the engine
        let cli = parse(&[
            "--initial", "1000", "--deposit", "100", "--rate", "4.5", "--years", "400000000",
        ]);
        assert!(cli.parameters().is_err());

        let cli = parse(&[
            "--initial", "1000", "--deposit", "100", "--rate", "4.5", "--years", "1001",
        ]);
        assert!(cli.parameters().is_err());
    }

    #[test]
    fn test_huge_amounts_rejected() {
        let cli = parse(&["--initial", "1e308", "--deposit", "0", "--rate", "5", "--years", "1"]);
        assert!(cli.parameters().is_err());

        let cli = parse(&["--initial", "1", "--deposit", "0", "--rate", "5000", "--years", "1"]);
        assert!(cli.parameters().is_err());
    }

    #[test]
    fn test_output_flags_need_parameters() {
        assert!(parse(&["--json"]).parameters().is_err());
        assert!(parse(&["--yearly-csv", "years.csv"]).parameters().is_err());
        assert!(parse(&["--monthly"]).parameters().is_err());
    }

    #[test]
    fn test_report_config_flags() {
        let cli = parse(&["--currency", "€", "--no-clear"]);
        let config = cli.report_config();

        assert_eq!(config.currency_symbol, "€");
        assert!(!config.clear_screen);
    }
}
