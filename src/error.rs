//! Sensor fault classification.
//!
//! A sensor fault is never fatal here: the control loop degrades by
//! substituting a nominal value or retaining the last calibration and
//! retries naturally on the next scheduled check.  Faults therefore flow
//! into the diagnostics ring rather than up a call stack, and the type is
//! `Copy` so it can be recorded without allocation.  Actuator pin writes
//! are infallible on the host and warn-and-continue on the board, so they
//! carry no error type of their own.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The SHT31 returned NaN (bus fault or sensor missing).
    NotANumber,
    /// Reading is outside the physically plausible range.
    OutOfRange,
    /// The ultrasonic echo never arrived within the listen window.
    EchoTimeout,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "reading is NaN"),
            Self::OutOfRange => write!(f, "reading out of range"),
            Self::EchoTimeout => write!(f, "ultrasonic echo timeout"),
        }
    }
}
