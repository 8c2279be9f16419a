//! Random obstacle detection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Draws strictly above this value report an obstacle on the left
pub const SPLIT_THRESHOLD: f64 = 0.5;

/// One obstacle reading. Exactly one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleReading {
    /// Obstacle detected on the left side
    pub obstacle_left: bool,
    /// Obstacle detected on the right side
    pub obstacle_right: bool,
}

impl ObstacleReading {
    /// Reading for an obstacle on the left
    pub fn left() -> Self {
        Self {
            obstacle_left: true,
            obstacle_right: false,
        }
    }

    /// Reading for an obstacle on the right
    pub fn right() -> Self {
        Self {
            obstacle_left: false,
            obstacle_right: true,
        }
    }

    fn from_draw(draw: f64) -> Self {
        if draw > SPLIT_THRESHOLD {
            Self::left()
        } else {
            Self::right()
        }
    }
}

/// Simulated obstacle sensor backed by an injectable random source
pub struct ObstacleSensor<R: Rng = StdRng> {
    rng: R,
    readings_taken: u64,
}

impl<R: Rng> ObstacleSensor<R> {
    /// Create a sensor drawing from the given random source
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            readings_taken: 0,
        }
    }

    /// Produce the next pair of obstacle flags
    pub fn produce_obstacle_events(&mut self) -> ObstacleReading {
        let draw: f64 = self.rng.random();
        let reading = ObstacleReading::from_draw(draw);
        self.readings_taken += 1;

        debug!(
            draw,
            left = reading.obstacle_left,
            right = reading.obstacle_right,
            "Obstacle reading"
        );

        reading
    }

    /// Number of readings produced so far
    pub fn readings_taken(&self) -> u64 {
        self.readings_taken
    }
}

impl ObstacleSensor<StdRng> {
    /// Deterministic sensor for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sensor seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}
