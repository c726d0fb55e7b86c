//! Error types for the fallible parts of the crate.
//!
//! The core sampling operations never fail. Errors only arise from the
//! checked sampling variants and from configuration loading.

use thiserror::Error;

/// Errors raised by checked sampling operations.
///
/// # Examples
/// ```
/// use sim_rng::RngError;
///
/// let err = RngError::InvalidParameter { name: "sigma", value: -1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid distribution parameter sigma = -1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RngError {
    /// A distribution parameter is outside its valid domain.
    #[error("Invalid distribution parameter {name} = {value}")]
    InvalidParameter {
        /// Parameter name (`mu` or `sigma`)
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
