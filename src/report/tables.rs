//! Text tables for the terminal
//!
//! All renderers write to any `io::Write` so the shell can target stdout and
//! tests can capture output in a buffer.

use std::io::{self, Write};

use crate::investment::InvestmentParameters;
use crate::projection::{MonthlyEntry, YearSummary};
use super::format::{currency_cell, format_currency};
use super::ReportConfig;

const BOX_WIDTH: usize = 32;

const YEAR_W: usize = 8;
const BALANCE_W: usize = 40;
const YEAR_INTEREST_W: usize = 40;

const MONTH_W: usize = 8;
const OPEN_W: usize = 25;
const DEPOSIT_W: usize = 25;
const INTEREST_W: usize = 20;
const CLOSE_W: usize = 25;

pub const BASELINE_TITLE: &str = "Balance and Interest Without Additional Monthly Deposits";
pub const CONTRIBUTION_TITLE: &str = "Balance and Interest With Additional Monthly Deposits";
pub const MONTHLY_TITLE: &str = "DETAILED MONTHLY BREAKDOWN";

/// Starred box header used on the input screens
pub fn write_header_box<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "*".repeat(BOX_WIDTH))?;
    writeln!(out, "*** {:<25}***", title)?;
    writeln!(out, "{}", "*".repeat(BOX_WIDTH))
}

/// Echo the entered parameters back to the user
pub fn write_confirmation<W: Write>(
    out: &mut W,
    params: &InvestmentParameters,
    config: &ReportConfig,
) -> io::Result<()> {
    let symbol = &config.currency_symbol;
    writeln!(out, "Initial Investment Amount: {}", format_currency(params.initial_amount, symbol))?;
    writeln!(out, "Monthly Deposit: {}", format_currency(params.monthly_deposit, symbol))?;
    writeln!(out, "Annual Interest (%): {:.2}", params.annual_rate_percent)?;
    writeln!(out, "Number of Years: {}", params.years)
}

/// Year-end balance and interest table
///
/// Year indices are printed from 0.
pub fn write_year_end_report<W: Write>(
    out: &mut W,
    title: &str,
    years: &[YearSummary],
    config: &ReportConfig,
) -> io::Result<()> {
    let width = YEAR_W + BALANCE_W + YEAR_INTEREST_W;
    let symbol = &config.currency_symbol;

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(width))?;
    writeln!(out, "*** {}  ***", title)?;
    writeln!(out, "{}", "=".repeat(width))?;
    writeln!(
        out,
        "{:<yw$}{:>bw$}{:>iw$}",
        "Year",
        "Year End Balance",
        "Year End Earned Interest",
        yw = YEAR_W,
        bw = BALANCE_W,
        iw = YEAR_INTEREST_W,
    )?;
    writeln!(out, "{}", "-".repeat(width))?;

    for year in years {
        writeln!(
            out,
            "{:<yw$}{}{}",
            year.year_index,
            currency_cell(year.year_end_balance, symbol, BALANCE_W),
            currency_cell(year.year_end_interest, symbol, YEAR_INTEREST_W),
            yw = YEAR_W,
        )?;
    }

    writeln!(out, "{}", "-".repeat(width))
}

/// Full month-by-month ledger table
pub fn write_monthly_report<W: Write>(
    out: &mut W,
    months: &[MonthlyEntry],
    config: &ReportConfig,
) -> io::Result<()> {
    let width = MONTH_W + OPEN_W + DEPOSIT_W + INTEREST_W + CLOSE_W;
    let symbol = &config.currency_symbol;

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(width))?;
    writeln!(out, "{:^width$}", format!("*** {} ***", MONTHLY_TITLE), width = width)?;
    writeln!(out, "{}", "=".repeat(width))?;
    writeln!(
        out,
        "{:<mw$}{:>ow$}{:>dw$}{:>iw$}{:>cw$}",
        "Month",
        "Opening Amount",
        "Deposited Amount",
        "Interest",
        "Closing Balance",
        mw = MONTH_W,
        ow = OPEN_W,
        dw = DEPOSIT_W,
        iw = INTEREST_W,
        cw = CLOSE_W,
    )?;
    writeln!(out, "{}", "-".repeat(width))?;

    for entry in months {
        writeln!(
            out,
            "{:<mw$}{}{}{}{}",
            entry.month,
            currency_cell(entry.opening_balance, symbol, OPEN_W),
            currency_cell(entry.deposited_amount, symbol, DEPOSIT_W),
            currency_cell(entry.interest_earned, symbol, INTEREST_W),
            currency_cell(entry.closing_balance, symbol, CLOSE_W),
            mw = MONTH_W,
        )?;
    }

    writeln!(out, "{}", "-".repeat(width))
}
