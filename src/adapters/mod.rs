//! Adapters — implementations of the port traits.
//!
//! The board adapter comes in two flavours selected at compile time: real
//! ESP-IDF peripherals when built with the `espidf` feature for the
//! target, and a pure in-memory simulation everywhere else.  The latter is
//! what the integration tests and host runs drive.

pub mod hardware;
pub mod log_sink;
pub mod time;

pub use hardware::HardwareAdapter;
pub use log_sink::LogEventSink;
pub use time::SystemClock;
