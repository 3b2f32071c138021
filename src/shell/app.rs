//! Interactive calculation loop
//!
//! Each cycle collects parameters, runs both scenarios and shows the reports.
//! Results live only for the cycle that produced them.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::error::InputError;
use crate::investment::InvestmentParameters;
use crate::report::{
    write_confirmation, write_header_box, write_monthly_report, write_year_end_report,
    ReportConfig, BASELINE_TITLE, CLEAR_SCREEN, CONTRIBUTION_TITLE,
};
use crate::scenario::{ScenarioComparison, ScenarioRunner};
use super::input::{
    parse_amount, parse_menu_choice, parse_rate, parse_years, parse_yes_no, read_line,
    MenuChoice,
};

pub const GOODBYE: &str = "Thank you for using the Airgead Banking App. Goodbye!";

/// Terminal session reading from `R` and writing to `W`
pub struct Shell<R, W> {
    input: R,
    out: W,
    config: ReportConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, config: ReportConfig) -> Self {
        Self { input, out, config }
    }

    /// Consume the shell, returning its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run calculation cycles until the user quits or input ends at a menu
    ///
    /// Returns the number of completed calculations. Input ending while
    /// parameters are being entered is an error.
    pub fn run(&mut self) -> Result<u32> {
        let mut completed = 0;

        loop {
            let params = self.collect_parameters()?;
            self.wait_for_enter("Press enter key to continue to the reports...")?;
            self.clear_screen()?;

            let comparison = ScenarioRunner::new(params).run();
            self.show_year_end_reports(&comparison)?;
            completed += 1;

            let question = "Would you like to see the DETAILED MONTHLY BREAKDOWN? (Y/N): ";
            match self.ask_yes_no(question)? {
                Some(true) => self.show_monthly_report(&comparison)?,
                Some(false) => {}
                None => break,
            }

            match self.ask_menu("Press 'C' to perform a new calculation or 'Q' to quit: ")? {
                MenuChoice::NewCalculation => debug!("starting calculation {}", completed + 1),
                MenuChoice::Quit => break,
            }
        }

        writeln!(self.out, "\n{}", GOODBYE)?;
        self.out.flush()?;
        info!("session ended after {} calculation(s)", completed);
        Ok(completed)
    }

    /// Prompt for all four parameters, then echo them back
    pub fn collect_parameters(&mut self) -> Result<InvestmentParameters> {
        self.clear_screen()?;
        write_header_box(&mut self.out, "DATA INPUT")?;

        let symbol = self.config.currency_symbol.clone();
        let initial =
            self.prompt(&format!("Initial Investment Amount: {}", symbol), parse_amount)?;
        let deposit = self.prompt(&format!("Monthly Deposit: {}", symbol), parse_amount)?;
        let rate = self.prompt("Annual Interest (%): ", parse_rate)?;
        let years = self.prompt("Number of Years: ", parse_years)?;

        let params = InvestmentParameters::new(initial, deposit, rate, years)
            .context("validated input was rejected")?;

        self.clear_screen()?;
        write_header_box(&mut self.out, "CONFIRM INPUT")?;
        write_confirmation(&mut self.out, &params, &self.config)?;

        Ok(params)
    }

    /// Prompt until `parse` accepts a line
    fn prompt<T>(&mut self, prompt: &str, parse: fn(&str) -> Result<T, InputError>) -> Result<T> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;

            let line = read_line(&mut self.input)?.ok_or(InputError::EndOfInput)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!("rejected input {:?}: {}", line, err);
                    writeln!(self.out, "Error: {}", err)?;
                }
            }
        }
    }

    fn show_year_end_reports(&mut self, comparison: &ScenarioComparison) -> Result<()> {
        write_year_end_report(
            &mut self.out,
            BASELINE_TITLE,
            &comparison.baseline.yearly,
            &self.config,
        )?;
        write_year_end_report(
            &mut self.out,
            CONTRIBUTION_TITLE,
            &comparison.contribution.yearly,
            &self.config,
        )?;
        Ok(())
    }

    fn show_monthly_report(&mut self, comparison: &ScenarioComparison) -> Result<()> {
        self.clear_screen()?;
        write_monthly_report(&mut self.out, &comparison.contribution.monthly, &self.config)?;
        self.wait_for_enter("Press enter key to continue...")
    }

    /// Block until a line is entered; end of input also continues
    fn wait_for_enter(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "\n{}", message)?;
        self.out.flush()?;
        read_line(&mut self.input)?;
        Ok(())
    }

    /// `None` when input ends before an answer
    fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>> {
        writeln!(self.out, "\n{}", question)?;
        self.out.flush()?;
        while let Some(line) = read_line(&mut self.input)? {
            if let Some(answer) = parse_yes_no(&line) {
                return Ok(Some(answer));
            }
        }
        Ok(None)
    }

    /// End of input counts as quitting
    fn ask_menu(&mut self, question: &str) -> Result<MenuChoice> {
        writeln!(self.out, "\n{}", question)?;
        self.out.flush()?;
        while let Some(line) = read_line(&mut self.input)? {
            if let Some(choice) = parse_menu_choice(&line) {
                return Ok(choice);
            }
        }
        Ok(MenuChoice::Quit)
    }

    fn clear_screen(&mut self) -> Result<()> {
        if self.config.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MONTHLY_TITLE;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Result<u32>, String) {
        let config = ReportConfig {
            clear_screen: false,
            ..ReportConfig::default()
        };
        let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new(), config);
        let result = shell.run();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_single_cycle() {
        let (result, output) = run_script("1000\n100\n4.5\n5\n\nN\nQ\n");

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("DATA INPUT"));
        assert!(output.contains("CONFIRM INPUT"));
        assert!(output.contains("Number of Years: 5"));
        assert!(output.contains(BASELINE_TITLE));
        assert!(output.contains(CONTRIBUTION_TITLE));
        assert!(output.contains("$1045.94"));
        assert!(!output.contains(&format!("*** {} ***", MONTHLY_TITLE)));
        assert!(output.trim_end().ends_with(GOODBYE));
    }

    #[test]
    fn test_invalid_entries_reprompt() {
        let (result, output) = run_script("abc\n-5\n1000\n100\n4.5\n0\n2.5\n1\n\nn\nq\n");

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("Error: Invalid input. Please enter a numerical value."));
        assert!(output.contains("Error: Value must be non-negative. Please try again."));
        assert!(output.contains("Error: Value must be a positive integer. Please try again."));
        assert!(output.contains("Error: Invalid input. Please enter an integer."));
        assert_eq!(output.matches("Initial Investment Amount: $").count(), 4);
        assert!(output.contains("Number of Years: 1"));
    }

    #[test]
    fn test_monthly_breakdown() {
        let (result, output) = run_script("1000\n100\n4.5\n1\n\ny\n\nQ\n");

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains(&format!("*** {} ***", MONTHLY_TITLE)));
        assert!(output.contains("$1104.13"));
        assert!(output.contains("Press enter key to continue..."));
    }

    #[test]
    fn test_out_of_range_entries_reprompt() {
        let (result, output) = run_script("1e308\n1000\n100\n5000\n4.5\n400000000\n5\n\nN\nQ\n");

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("Error: Value must be at most 1000000000000. Please try again."));
        assert!(output.contains("Error: Value must be at most 1000. Please try again."));
        assert!(output.contains("Error: Number of years must be at most 1000. Please try again."));
        assert!(!output.contains("$inf"));
        assert!(output.contains("$1045.94"));
    }

    #[test]
    fn test_repeat_calculation() {
        let (result, output) = run_script("1000\n0\n5\n1\n\nN\nC\n500\n50\n3\n2\n\nN\nQ\n");

        assert_eq!(result.unwrap(), 2);
        assert_eq!(output.matches("CONFIRM INPUT").count(), 2);
        assert!(output.contains("Initial Investment Amount: $500.00"));
    }

    #[test]
    fn test_blank_menu_answers_are_skipped() {
        let (result, _) = run_script("1\n1\n1\n1\n\n\n  \nN\n\nQ\n");
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_eof_during_input_is_error() {
        let (result, output) = run_script("1000\n100\n");

        let err = result.unwrap_err();
        assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::EndOfInput));
        assert!(!output.contains(GOODBYE));
    }

    #[test]
    fn test_eof_at_menu_quits() {
        let (result, output) = run_script("1000\n100\n4.5\n2\n\nN\n");

        assert_eq!(result.unwrap(), 1);
        assert!(output.trim_end().ends_with(GOODBYE));
    }

    #[test]
    fn test_clear_screen_enabled() {
        let mut shell = Shell::new(
            Cursor::new("1\n1\n1\n1\n\nN\nQ\n".to_string()),
            Vec::new(),
            ReportConfig::default(),
        );
        shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains(CLEAR_SCREEN));
    }
}
