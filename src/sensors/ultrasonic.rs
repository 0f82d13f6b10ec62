//! HC-SR04 ultrasonic level conversion.
//!
//! The transceiver is mounted at `height_cm` above the tank floor looking
//! straight down at the water surface.  Round-trip echo time converts to
//! distance at the speed of sound (0.034 cm/µs, halved for the return
//! leg); water level is the mount height minus that distance.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::SensorError;

/// Speed of sound in cm/µs at room temperature.
const SOUND_CM_PER_US: f32 = 0.034;

/// Water level (cm above the tank floor) from an echo round trip.
///
/// An echo of 0 µs means the listen window expired without a pulse;
/// levels below the floor (echo longer than the mount height allows)
/// clamp to 0 rather than going negative.
pub fn level_from_echo(echo_us: u32, height_cm: f32) -> Result<f32, SensorError> {
    if echo_us == 0 {
        return Err(SensorError::EchoTimeout);
    }
    let distance_cm = echo_us as f32 * SOUND_CM_PER_US / 2.0;
    Ok((height_cm - distance_cm).max(0.0))
}

#[cfg(not(target_os = "espidf"))]
static SIM_ECHO_US: AtomicU32 = AtomicU32::new(186); // ~31.8 cm level

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_us(echo_us: u32) {
    SIM_ECHO_US.store(echo_us, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_echo_us() -> u32 {
    SIM_ECHO_US.load(Ordering::Relaxed)
}
