use thiserror::Error;

/// Rejections raised while turning wire input into domain values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid interval '{value}', expected one of 1m, 5m, 15m, 1h, 1d")]
    InvalidInterval { value: String },
    #[error("limit must be between 1 and {max}, got {value}")]
    LimitOutOfRange { value: i64, max: u32 },

    #[error("fiscal period must look like 2025Q1: '{value}'")]
    InvalidFiscalPeriod { value: String },
    #[error("invalid period '{value}', expected one of annual, quarterly, both")]
    InvalidEstimatePeriod { value: String },

    #[error("as_of must be YYYY-MM-DD or an ISO8601 datetime: '{value}'")]
    InvalidAsOf { value: String },

    #[error("at least one ticker is required")]
    EmptyTickers,
    #[error("field '{field}' must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
}
