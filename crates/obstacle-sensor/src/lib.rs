//! Obstacle Sensor
//!
//! Stand-in for a vision pipeline: a uniform random draw decides whether the
//! obstacle sits on the left or on the right of the car.

mod sensor;

pub use sensor::{ObstacleReading, ObstacleSensor, SPLIT_THRESHOLD};
