//! Vehicle Controller
//!
//! Translates a bag of triggered events into steering and speed commands
//! through a fixed mapping. No priority or conflict resolution: every
//! triggered event fires, in canonical event order.

mod bag;
mod car;
mod error;
mod event;

pub use bag::EventBag;
pub use car::{Car, CarProps, PowerState, Response};
pub use error::ControllerError;
pub use event::Event;
