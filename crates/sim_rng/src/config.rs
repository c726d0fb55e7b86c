//! Generator configuration.
//!
//! Loaded from TOML so that a host simulation can keep its seed alongside
//! the rest of its run parameters:
//!
//! ```toml
//! seed = 42
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::rng::DEFAULT_SEED;

/// Configuration for a [`RandomGenerator`](crate::RandomGenerator).
///
/// # Examples
/// ```
/// use sim_rng::RngConfig;
///
/// let config = RngConfig::from_toml_str("seed = 42").unwrap();
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.resolved_seed(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RngConfig {
    /// Explicit seed. `None` falls back to [`DEFAULT_SEED`].
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RngConfig {
    /// Creates a configuration with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parses a configuration from a TOML document.
    ///
    /// An empty document is valid and leaves the seed unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or a
    /// seed that does not fit in a `u64`.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: RngConfig = toml::from_str(input)?;
        Ok(config)
    }

    /// Returns the configured seed, or [`DEFAULT_SEED`] if none was given.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
