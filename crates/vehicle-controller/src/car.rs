//! Car: power state plus fixed event dispatch

use actuators::{Direction, Speed, Steering};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::bag::EventBag;
use crate::event::Event;

/// Car power state. Fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    #[default]
    Off,
    On,
}

impl From<bool> for PowerState {
    fn from(running: bool) -> Self {
        if running {
            PowerState::On
        } else {
            PowerState::Off
        }
    }
}

/// Construction parameters for [`Car`]
#[derive(Debug)]
pub struct CarProps<S, V> {
    /// Initial power state
    pub power: PowerState,
    /// Steering actuator, owned for the car's lifetime
    pub steering: S,
    /// Speed actuator, owned for the car's lifetime
    pub speed: V,
}

impl<S, V> CarProps<S, V> {
    /// Props for a car that starts `Off`
    pub fn new(steering: S, speed: V) -> Self {
        Self {
            power: PowerState::default(),
            steering,
            speed,
        }
    }

    pub fn with_power(mut self, power: PowerState) -> Self {
        self.power = power;
        self
    }
}

/// Outcome of [`Car::respond`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Car is off, nothing was dispatched
    Off,
    /// Events dispatched in order, plus names that matched no event
    Dispatched {
        handled: Vec<Event>,
        unrecognized: Vec<String>,
    },
}

impl Response {
    /// Events that produced actuator calls
    pub fn handled(&self) -> &[Event] {
        match self {
            Response::Off => &[],
            Response::Dispatched { handled, .. } => handled,
        }
    }
}

/// Simulated car
pub struct Car<S, V> {
    power: PowerState,
    steering: S,
    speed: V,
}

impl<S: Steering, V: Speed> Car<S, V> {
    /// Create a car owning the given actuators
    pub fn new(props: CarProps<S, V>) -> Self {
        debug!("Creating car, power {:?}", props.power);
        Self {
            power: props.power,
            steering: props.steering,
            speed: props.speed,
        }
    }

    /// React to one bag of events
    pub fn respond(&mut self, events: &EventBag) -> Response {
        if !self.is_running() {
            info!("The car is OFF");
            return Response::Off;
        }

        let handled: Vec<Event> = events.triggered().collect();
        for &event in &handled {
            self.dispatch(event);
        }

        let unrecognized = events.unrecognized().to_vec();
        if !unrecognized.is_empty() {
            warn!(?unrecognized, "Ignoring unrecognized events");
        }

        Response::Dispatched {
            handled,
            unrecognized,
        }
    }

    fn dispatch(&mut self, event: Event) {
        debug!(%event, "Dispatching");

        match event {
            Event::ObstacleLeft => self.steering.turn(Direction::Right),
            Event::ObstacleRight => self.steering.turn(Direction::Left),
            Event::Accelerate => self.speed.accelerate(),
            Event::Decelerate => self.speed.decelerate(),
            Event::EmergencyBrake => self.speed.stop(),
            Event::ParallelPark => self.parallel_park(),
        }
    }

    fn parallel_park(&mut self) {
        info!("Initiating parallel parking maneuver");
        self.speed.decelerate();
        self.steering.turn(Direction::Right);
        self.steering.turn(Direction::Left);
        self.speed.stop();
    }
}

impl<S, V> Car<S, V> {
    pub fn power(&self) -> PowerState {
        self.power
    }

    pub fn is_running(&self) -> bool {
        self.power == PowerState::On
    }

    pub fn steering(&self) -> &S {
        &self.steering
    }

    pub fn speed(&self) -> &V {
        &self.speed
    }

    /// Release the actuators
    pub fn into_parts(self) -> (S, V) {
        (self.steering, self.speed)
    }
}
