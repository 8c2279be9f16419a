//! Autonomous Car Simulation - Main Entry Point

use actuators::{SpeedControl, SteeringControl};
use anyhow::Context;
use obstacle_sensor::ObstacleSensor;
use simulation::{init_logging, Simulation, SimulationConfig};
use tracing::debug;
use vehicle_controller::{Car, CarProps};

fn main() -> anyhow::Result<()> {
    let config = SimulationConfig::load().context("failed to load simulation config")?;
    init_logging(&config)?;

    debug!("=== Car Simulation v{} ===", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Loaded configuration");

    let car = Car::new(
        CarProps::new(SteeringControl::new(), SpeedControl::new())
            .with_power(config.running.into()),
    );
    let sensor = match config.seed {
        Some(seed) => ObstacleSensor::seeded(seed),
        None => ObstacleSensor::from_entropy(),
    };

    let mut simulation = Simulation::new(car, sensor, &config)?;
    let report = simulation.run();

    debug!(
        turns = report.turns.len(),
        handled = report.handled_count(),
        "Simulation finished"
    );

    Ok(())
}
