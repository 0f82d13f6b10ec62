//! LDR light sensor.
//!
//! The raw ADC count is used directly against the configured threshold;
//! no conversion to lux is attempted (the divider is uncalibrated and the
//! rotation decision only needs "bright enough").

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_LIGHT_RAW: AtomicU16 = AtomicU16::new(500);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_raw(raw: u16) {
    SIM_LIGHT_RAW.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_light_raw() -> u16 {
    SIM_LIGHT_RAW.load(Ordering::Relaxed)
}
