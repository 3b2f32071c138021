//! Parsing and validation of single lines of user input

use std::io::{self, BufRead};

use crate::error::InputError;
use crate::investment::{MAX_AMOUNT, MAX_RATE_PERCENT, MAX_YEARS};

/// Answer to the end-of-cycle menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewCalculation,
    Quit,
}

/// Read one line, without its terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Parse a non-negative currency amount no larger than `MAX_AMOUNT`
pub fn parse_amount(line: &str) -> Result<f64, InputError> {
    parse_bounded(line, MAX_AMOUNT)
}

/// Parse a non-negative annual rate no larger than `MAX_RATE_PERCENT`
pub fn parse_rate(line: &str) -> Result<f64, InputError> {
    parse_bounded(line, MAX_RATE_PERCENT)
}

fn parse_bounded(line: &str, max: f64) -> Result<f64, InputError> {
    let value: f64 = line.trim().parse().map_err(|_| InputError::NonNumericInput)?;

    // "nan" and "inf" parse as f64 but are not amounts
    if !value.is_finite() {
        return Err(InputError::NonNumericInput);
    }
    if value < 0.0 {
        return Err(InputError::NegativeValueRejected);
    }
    if value > max {
        return Err(InputError::ValueTooLarge { max: max as u64 });
    }

    // Normalize "-0" so it never displays with a sign
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Parse a positive whole number of years
pub fn parse_years(line: &str) -> Result<u32, InputError> {
    let text = line.trim();
    let value: i64 = match text.parse() {
        Ok(v) => v,
        Err(_) => {
            return Err(match text.parse::<f64>() {
                Ok(f) if f.is_finite() && f > MAX_YEARS as f64 => {
                    InputError::YearCountTooLarge { max: MAX_YEARS }
                }
                Ok(_) => InputError::NonIntegerInput,
                Err(_) => InputError::NonNumericInput,
            });
        }
    };

    if value <= 0 {
        return Err(InputError::NonPositiveYearCount);
    }
    if value > MAX_YEARS as i64 {
        return Err(InputError::YearCountTooLarge { max: MAX_YEARS });
    }
    Ok(value as u32)
}

/// First non-blank character, uppercased. `None` for a blank line.
fn first_letter(line: &str) -> Option<char> {
    line.trim().chars().next().map(|c| c.to_ascii_uppercase())
}

/// `Some(true)` for an answer starting with Y, `Some(false)` for any other
/// non-blank answer, `None` for a blank line
pub fn parse_yes_no(line: &str) -> Option<bool> {
    first_letter(line).map(|c| c == 'Y')
}

/// Only an answer starting with Q quits; `None` for a blank line
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    first_letter(line).map(|c| {
        if c == 'Q' {
            MenuChoice::Quit
        } else {
            MenuChoice::NewCalculation
        }
    })
}
