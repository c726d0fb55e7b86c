//! # sim_rng: Seeded Random Sampling
//!
//! Centralises randomness for a host simulation: seed an engine, draw
//! uniform values in [0, 1), and draw normal values with a given mean and
//! standard deviation.
//!
//! - Generator: `RandomGenerator` (`rng`)
//! - Configuration: `RngConfig` (`config`)
//! - Error types: `RngError`, `ConfigError` (`error`)
//!
//! ## Usage Example
//!
//! ```rust
//! use sim_rng::{RandomGenerator, RngConfig};
//!
//! let config = RngConfig::from_toml_str("seed = 42").unwrap();
//! let mut rng = RandomGenerator::from_config(&config);
//! assert_eq!(rng.seed(), 42);
//!
//! let u = rng.sample_uniform();
//! assert!(u >= 0.0 && u < 1.0);
//! ```
//!
//! ## Reproducibility
//!
//! Output sequences are stable for a given build and set of dependency
//! versions. They are not meant to match the standard-library generators
//! of other languages.
//!
//! ## Logging
//!
//! Events are emitted through `tracing` (`debug` on seeding, `trace` on
//! batch fills). The crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod rng;

pub use config::RngConfig;
pub use error::{ConfigError, RngError};
pub use rng::{RandomGenerator, DEFAULT_SEED};
