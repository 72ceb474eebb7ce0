//! gate.io Disperser Setup Library
//!
//! Interactive acquisition and persistence of disperser configuration:
//! exchange API credentials and withdrawal parameters.

pub mod cli;
pub mod config;
pub mod currencies;
pub mod error;
pub mod exchange;
pub mod paths;
pub mod settings;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
