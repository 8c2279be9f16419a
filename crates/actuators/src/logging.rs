//! Logging actuators
//!
//! Each command becomes an `Executing: <command>` line on the tracing
//! subscriber. The log target names the actuator.

use tracing::info;

use crate::control::{Control, Speed, Steering};

/// Steering actuator that logs its commands
#[derive(Debug, Default)]
pub struct SteeringControl {
    commands_executed: u64,
}

impl SteeringControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands executed so far
    pub fn commands_executed(&self) -> u64 {
        self.commands_executed
    }
}

impl Control for SteeringControl {
    fn execute(&mut self, command: &str) {
        self.commands_executed += 1;
        info!(target: "actuators::steering", "Executing: {}", command);
    }
}

impl Steering for SteeringControl {}

/// Speed actuator that logs its commands
#[derive(Debug, Default)]
pub struct SpeedControl {
    commands_executed: u64,
}

impl SpeedControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands executed so far
    pub fn commands_executed(&self) -> u64 {
        self.commands_executed
    }
}

impl Control for SpeedControl {
    fn execute(&mut self, command: &str) {
        self.commands_executed += 1;
        info!(target: "actuators::speed", "Executing: {}", command);
    }
}

impl Speed for SpeedControl {}
