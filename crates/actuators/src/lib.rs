//! Actuator Interfaces
//!
//! Two independent capability sets built on a shared `execute` primitive:
//! - Steering: turn left or right
//! - Speed: accelerate, decelerate, emergency stop
//!
//! The bundled implementations only log the commands they receive.

mod control;
mod logging;

pub use control::{Control, Direction, Speed, Steering};
pub use logging::{SpeedControl, SteeringControl};

/// Command strings sent through `Control::execute`
pub mod command {
    /// Prefix of every turn command
    pub const TURN: &str = "turn";
    /// Speed up
    pub const ACCELERATE: &str = "accelerate";
    /// Slow down
    pub const DECELERATE: &str = "decelerate";
    /// Full stop
    pub const EMERGENCY_STOP: &str = "EMERGENCY STOP";
}
