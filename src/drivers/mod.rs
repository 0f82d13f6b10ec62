//! Low-level actuator drivers.
//!
//! Everything here is generic over [`embedded_hal::digital::OutputPin`],
//! so the same relay and stepper logic runs against real GPIO drivers on
//! the board and against [`SimPin`] in host builds and tests.

pub mod relay;
pub mod sim_pin;
pub mod stepper;

pub use relay::Relay;
pub use sim_pin::SimPin;
pub use stepper::Stepper;
