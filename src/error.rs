//! Errors from strict numeric parsing.

/// Why a string was rejected by [`parse_number`](crate::parse_number) or
/// [`parse_double`](crate::parse_double).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNumberError {
    #[error("cannot parse a number from an empty string")]
    Empty,
    #[error("invalid character at byte {index} in {input:?}")]
    Invalid { input: String, index: usize },
    #[error("{input:?} does not fit in the target type")]
    OutOfRange { input: String },
}
