//! Capability traits

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::command;

/// Steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Base capability: perform a raw command
pub trait Control {
    /// Execute a command. Fire-and-forget, no acknowledgment.
    fn execute(&mut self, command: &str);
}

/// Steering capability
pub trait Steering: Control {
    /// Turn towards `direction`
    fn turn(&mut self, direction: Direction) {
        self.execute(&format!("{} {}", command::TURN, direction));
    }
}

/// Speed capability
pub trait Speed: Control {
    fn accelerate(&mut self) {
        self.execute(command::ACCELERATE);
    }

    fn decelerate(&mut self) {
        self.execute(command::DECELERATE);
    }

    /// Emergency stop
    fn stop(&mut self) {
        self.execute(command::EMERGENCY_STOP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<String>,
    }

    impl Control for Recorder {
        fn execute(&mut self, command: &str) {
            self.commands.push(command.to_string());
        }
    }

    impl Steering for Recorder {}
    impl Speed for Recorder {}

    #[test]
    fn test_turn_commands() {
        let mut recorder = Recorder::default();
        recorder.turn(Direction::Right);
        recorder.turn(Direction::Left);

        assert_eq!(recorder.commands, vec!["turn right", "turn left"]);
    }

    #[test]
    fn test_speed_commands() {
        let mut recorder = Recorder::default();
        recorder.accelerate();
        recorder.decelerate();
        recorder.stop();

        assert_eq!(
            recorder.commands,
            vec!["accelerate", "decelerate", "EMERGENCY STOP"]
        );
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
