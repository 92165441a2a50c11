use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The packed buffer holds fewer bits than the requested symbol count needs.
    #[error(
        "packed data truncated: {symbols} symbols need {expected} bytes, got {available}"
    )]
    Truncated {
        symbols: usize,
        expected: usize,
        available: usize,
    },
}
