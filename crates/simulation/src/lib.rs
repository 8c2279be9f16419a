//! Autonomous Car Simulation
//!
//! Wires the obstacle sensor, the actuators and the vehicle controller into
//! a fixed number of synchronous turns.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;

pub use config::{LogFormat, ScriptEntry, SimulationConfig};
pub use driver::{Simulation, SimulationReport, TurnRecord};
pub use error::SimulationError;
pub use logging::init_logging;
