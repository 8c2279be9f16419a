//! Recognized events

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ControllerError;

/// Event the controller knows how to dispatch.
///
/// Declaration order is the dispatch order for simultaneous events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Obstacle on the left, steer right
    ObstacleLeft,
    /// Obstacle on the right, steer left
    ObstacleRight,
    Accelerate,
    Decelerate,
    EmergencyBrake,
    /// Scripted parking maneuver
    ParallelPark,
}

impl Event {
    /// All events in dispatch order
    pub const ALL: [Event; 6] = [
        Event::ObstacleLeft,
        Event::ObstacleRight,
        Event::Accelerate,
        Event::Decelerate,
        Event::EmergencyBrake,
        Event::ParallelPark,
    ];

    /// Canonical event name
    pub fn name(self) -> &'static str {
        match self {
            Event::ObstacleLeft => "ObstacleLeft",
            Event::ObstacleRight => "ObstacleRight",
            Event::Accelerate => "Accelerate",
            Event::Decelerate => "Decelerate",
            Event::EmergencyBrake => "EmergencyBrake",
            Event::ParallelPark => "ParallelPark",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Event {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::ALL
            .into_iter()
            .find(|event| event.name() == s)
            .ok_or_else(|| ControllerError::UnknownEvent(s.to_string()))
    }
}
