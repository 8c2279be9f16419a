//! Simulation Driver
//!
//! Each turn reads the sensor once, overlays the scripted events for that
//! turn and hands the bag to the car.

use actuators::{Speed, Steering};
use obstacle_sensor::{ObstacleReading, ObstacleSensor};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vehicle_controller::{Car, Event, EventBag, Response};

use crate::config::{ScriptEntry, SimulationConfig};
use crate::error::SimulationError;

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub reading: ObstacleReading,
    pub response: Response,
}

/// Record of a full run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub turns: Vec<TurnRecord>,
}

impl SimulationReport {
    /// Total events dispatched across all turns
    pub fn handled_count(&self) -> usize {
        self.turns.iter().map(|t| t.response.handled().len()).sum()
    }
}

/// Turn-based simulation owning the car and its sensor
pub struct Simulation<S, V, R: Rng> {
    car: Car<S, V>,
    sensor: ObstacleSensor<R>,
    turns: usize,
    script: Vec<ScriptEntry>,
}

impl<S: Steering, V: Speed, R: Rng> Simulation<S, V, R> {
    /// Wire a simulation. Scripted events past the last turn are dropped.
    pub fn new(
        car: Car<S, V>,
        sensor: ObstacleSensor<R>,
        config: &SimulationConfig,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            car,
            sensor,
            turns: config.turns,
            script: config.active_script(),
        })
    }

    /// Scripted flags for a turn. Every scripted event is present, true
    /// only on the turns it is scheduled for.
    pub fn scripted_events(&self, turn: usize) -> EventBag {
        let mut bag = EventBag::new();
        for entry in &self.script {
            let due = entry.turn == turn;
            if due || bag.get(entry.event).is_none() {
                bag.set(entry.event, due);
            }
        }
        bag
    }

    /// Run one turn
    pub fn step(&mut self, turn: usize) -> TurnRecord {
        debug!(turn, "Starting turn");

        let reading = self.sensor.produce_obstacle_events();
        let mut events = EventBag::new()
            .with(Event::ObstacleLeft, reading.obstacle_left)
            .with(Event::ObstacleRight, reading.obstacle_right);
        events.merge(self.scripted_events(turn));

        let response = self.car.respond(&events);
        TurnRecord {
            turn,
            reading,
            response,
        }
    }

    /// Run every configured turn in order
    pub fn run(&mut self) -> SimulationReport {
        let turns = (0..self.turns).map(|turn| self.step(turn)).collect();
        SimulationReport { turns }
    }

    pub fn car(&self) -> &Car<S, V> {
        &self.car
    }

    pub fn into_car(self) -> Car<S, V> {
        self.car
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actuators::{SpeedControl, SteeringControl};
    use vehicle_controller::{CarProps, PowerState};

    fn simulation(
        config: &SimulationConfig,
    ) -> Simulation<SteeringControl, SpeedControl, rand::rngs::StdRng> {
        let car = Car::new(
            CarProps::new(SteeringControl::new(), SpeedControl::new())
                .with_power(config.running.into()),
        );
        Simulation::new(car, ObstacleSensor::seeded(3), config).unwrap()
    }

    #[test]
    fn test_reference_script_flags() {
        let sim = simulation(&SimulationConfig::default());

        let turn0 = sim.scripted_events(0);
        assert_eq!(turn0.get(Event::Accelerate), Some(true));
        assert_eq!(turn0.get(Event::Decelerate), Some(false));
        assert_eq!(turn0.get(Event::ParallelPark), Some(false));
        assert_eq!(turn0.get(Event::EmergencyBrake), Some(false));

        let turn1 = sim.scripted_events(1);
        assert_eq!(turn1.triggered().count(), 0);
        assert_eq!(turn1.len(), 4);

        let turn3 = sim.scripted_events(3);
        assert_eq!(turn3.triggered().collect::<Vec<_>>(), vec![Event::ParallelPark]);
    }

    #[test]
    fn test_event_scheduled_twice() {
        let config = SimulationConfig {
            turns: 3,
            script: vec![
                ScriptEntry::new(0, Event::Accelerate),
                ScriptEntry::new(2, Event::Accelerate),
            ],
            ..Default::default()
        };
        let sim = simulation(&config);

        assert_eq!(sim.scripted_events(0).get(Event::Accelerate), Some(true));
        assert_eq!(sim.scripted_events(1).get(Event::Accelerate), Some(false));
        assert_eq!(sim.scripted_events(2).get(Event::Accelerate), Some(true));
    }

    #[test]
    fn test_run_covers_every_turn() {
        let mut sim = simulation(&SimulationConfig::default());
        let report = sim.run();

        assert_eq!(report.turns.len(), 5);
        for (idx, record) in report.turns.iter().enumerate() {
            assert_eq!(record.turn, idx);
            assert!(record.reading.obstacle_left ^ record.reading.obstacle_right);
        }
        // one obstacle per turn plus four scripted events
        assert_eq!(report.handled_count(), 9);
    }

    #[test]
    fn test_stopped_car_run() {
        let config = SimulationConfig {
            running: false,
            ..Default::default()
        };
        let mut sim = simulation(&config);
        let report = sim.run();

        assert!(report.turns.iter().all(|t| t.response == Response::Off));
        assert_eq!(sim.car().power(), PowerState::Off);

        let (steering, speed) = sim.into_car().into_parts();
        assert_eq!(steering.commands_executed(), 0);
        assert_eq!(speed.commands_executed(), 0);
    }

    #[test]
    fn test_short_run_skips_late_events() {
        let config = SimulationConfig {
            turns: 3,
            ..Default::default()
        };
        let mut sim = simulation(&config);
        let report = sim.run();

        assert_eq!(report.turns.len(), 3);
        // three obstacles plus accelerate and decelerate
        assert_eq!(report.handled_count(), 5);
        assert!(report
            .turns
            .iter()
            .all(|t| !t.response.handled().contains(&Event::ParallelPark)));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let config = SimulationConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        let car = Car::new(CarProps::new(SteeringControl::new(), SpeedControl::new()));

        assert!(matches!(
            Simulation::new(car, ObstacleSensor::seeded(0), &config),
            Err(SimulationError::InvalidLogLevel(_))
        ));
    }
}
