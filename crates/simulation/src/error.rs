//! Simulation Error Types

use thiserror::Error;

/// Errors raised while setting up a simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Global subscriber already installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
