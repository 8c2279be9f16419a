//! Tracing subscriber setup

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::FmtSubscriber;

use crate::config::{LogFormat, SimulationConfig};
use crate::error::SimulationError;

/// Subscriber for the `plain` format.
///
/// Drops time, level and target so actuator lines read exactly
/// `Executing: <command>`.
pub fn plain_subscriber<W>(level: Level, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .finish()
}

/// Install the global subscriber on stdout
pub fn init_logging(config: &SimulationConfig) -> Result<(), SimulationError> {
    let level = config.level()?;

    let installed = match config.log_format {
        LogFormat::Plain => {
            tracing::subscriber::set_global_default(plain_subscriber(level, std::io::stdout))
        }
        LogFormat::Json => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .json()
                .with_target(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
    };

    installed.map_err(|e| SimulationError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actuators::{SpeedControl, SteeringControl};
    use std::io;
    use std::sync::{Arc, Mutex};
    use vehicle_controller::{Car, CarProps, Event, EventBag, PowerState};

    /// In-memory sink shared with the subscriber
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    fn car(power: PowerState) -> Car<SteeringControl, SpeedControl> {
        Car::new(CarProps::new(SteeringControl::new(), SpeedControl::new()).with_power(power))
    }

    fn plain_output(run: impl FnOnce()) -> Vec<String> {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = plain_subscriber(Level::INFO, move || writer.clone());
        tracing::subscriber::with_default(subscriber, run);
        sink.lines()
    }

    #[test]
    fn test_plain_actuator_lines() {
        let lines = plain_output(|| {
            let mut car = car(PowerState::On);
            car.respond(&EventBag::new().with(Event::ObstacleLeft, true));
            car.respond(&EventBag::new().with(Event::EmergencyBrake, true));
        });

        assert_eq!(lines, vec!["Executing: turn right", "Executing: EMERGENCY STOP"]);
    }

    #[test]
    fn test_plain_off_notice() {
        let lines = plain_output(|| {
            car(PowerState::Off).respond(&EventBag::new().with(Event::Accelerate, true));
        });

        assert_eq!(lines, vec!["The car is OFF"]);
    }

    #[test]
    fn test_plain_parking_lines() {
        let lines = plain_output(|| {
            car(PowerState::On).respond(&EventBag::new().with(Event::ParallelPark, true));
        });

        assert_eq!(
            lines,
            vec![
                "Initiating parallel parking maneuver",
                "Executing: decelerate",
                "Executing: turn right",
                "Executing: turn left",
                "Executing: EMERGENCY STOP",
            ]
        );
    }
}
