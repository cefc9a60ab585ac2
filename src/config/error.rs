//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment value could not be parsed for the named setting.
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },

    /// Numeric setting is outside its accepted range.
    #[error("{name} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}
