//! Error types.
//!
//! Parsing never fails. These cover the checks a caller runs on a parsed
//! request before booking, and malformed configuration.

/// A parsed request that cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// No venue name could be recovered from the text.
    #[error("Could not determine restaurant name from request.")]
    MissingRestaurant,

    /// No date phrase was found in the text.
    #[error("Could not determine date from request.")]
    MissingDate,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment setting held a value that could not be used.
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
