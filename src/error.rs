//! Error types for parameter validation, user input, and report export

/// Errors produced when building projection inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

/// Validation failures for a single line of interactive input.
///
/// The shell reports these and prompts again. Only `EndOfInput` ends a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a numerical value.")]
    NonNumericInput,

    #[error("Invalid input. Please enter an integer.")]
    NonIntegerInput,

    #[error("Value must be non-negative. Please try again.")]
    NegativeValueRejected,

    #[error("Value must be a positive integer. Please try again.")]
    NonPositiveYearCount,

    #[error("Value must be at most {max}. Please try again.")]
    ValueTooLarge { max: u64 },

    #[error("Number of years must be at most {max}. Please try again.")]
    YearCountTooLarge { max: u32 },

    #[error("input ended before a value was entered")]
    EndOfInput,
}

/// Errors produced while writing reports to disk or stdout.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
