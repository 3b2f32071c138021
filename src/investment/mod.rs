//! Investment parameter types

mod params;

pub use params::{
    InvestmentParameters, MAX_AMOUNT, MAX_RATE_PERCENT, MAX_YEARS, MONTHS_PER_YEAR,
};
