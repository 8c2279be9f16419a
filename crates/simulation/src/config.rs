//! Simulation configuration
//!
//! Layered with the `config` crate: built-in defaults (the reference run),
//! then an optional TOML file, then `CAR_SIM_*` environment variables.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{warn, Level};
use vehicle_controller::Event;

use crate::error::SimulationError;

/// Config file read when `CAR_SIM_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "car-sim.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "CAR_SIM_CONFIG";

/// Prefix of environment overrides, e.g. `CAR_SIM_TURNS=10`
pub const ENV_PREFIX: &str = "CAR_SIM";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Bare message lines, e.g. `Executing: turn left`
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Event forced to true on one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub turn: usize,
    pub event: Event,
}

impl ScriptEntry {
    pub fn new(turn: usize, event: Event) -> Self {
        Self { turn, event }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of turns to run (default: 5)
    pub turns: usize,
    /// Whether the car starts running (default: true)
    pub running: bool,
    /// Sensor seed; entropy when absent
    pub seed: Option<u64>,
    /// Max log level (default: "info")
    pub log_level: String,
    pub log_format: LogFormat,
    /// Scripted events merged into the sensor output
    pub script: Vec<ScriptEntry>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            turns: 5,
            running: true,
            seed: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Plain,
            script: Self::reference_script(),
        }
    }
}

impl SimulationConfig {
    /// Accelerate, then decelerate, park and brake on turns 0, 2, 3, 4
    pub fn reference_script() -> Vec<ScriptEntry> {
        vec![
            ScriptEntry::new(0, Event::Accelerate),
            ScriptEntry::new(2, Event::Decelerate),
            ScriptEntry::new(3, Event::ParallelPark),
            ScriptEntry::new(4, Event::EmergencyBrake),
        ]
    }

    /// Load from the file named by `CAR_SIM_CONFIG`, or `car-sim.toml`
    pub fn load() -> Result<Self, SimulationError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    /// Load from an optional TOML file plus environment overrides
    pub fn load_from(path: &str) -> Result<Self, SimulationError> {
        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: SimulationConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from TOML text, without environment overrides
    pub fn from_toml(raw: &str) -> Result<Self, SimulationError> {
        let settings = Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?;

        let config: SimulationConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject unknown log levels
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.level()?;
        Ok(())
    }

    /// Script entries that fall inside the run. Entries past the last turn
    /// never fire and are dropped with a warning.
    pub fn active_script(&self) -> Vec<ScriptEntry> {
        self.script
            .iter()
            .filter(|entry| {
                let in_range = entry.turn < self.turns;
                if !in_range {
                    warn!(
                        event = %entry.event,
                        turn = entry.turn,
                        turns = self.turns,
                        "Dropping scripted event past the last turn"
                    );
                }
                in_range
            })
            .copied()
            .collect()
    }

    /// Parsed max log level
    pub fn level(&self) -> Result<Level, SimulationError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| SimulationError::InvalidLogLevel(self.log_level.clone()))
    }
}
