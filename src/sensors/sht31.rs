//! SHT31 climate maths and host-side simulation values.
//!
//! Vapor-pressure deficit drives the misting cadence.  Saturation vapor
//! pressure uses the Tetens approximation, accurate to well under 1% over
//! the 0–50 °C range an enclosure sees.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

/// Saturation vapor pressure (kPa) at air temperature `t` °C (Tetens).
pub fn svp_kpa(t: f32) -> f32 {
    0.6108 * (17.27 * t / (t + 237.3)).exp()
}

/// Vapor-pressure deficit (kPa) at `t` °C and `rh` %RH.
pub fn vpd_kpa(t: f32, rh: f32) -> f32 {
    svp_kpa(t) * (1.0 - rh / 100.0)
}

// ───────────────────────────────────────────────────────────────
// Host simulation (f32 stored as bits; sensors are shared state
// between a test driver thread and the control loop)
// ───────────────────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
static SIM_TEMPERATURE_C: AtomicU32 = AtomicU32::new(0x41c8_0000); // 25.0
#[cfg(not(target_os = "espidf"))]
static SIM_HUMIDITY_PCT: AtomicU32 = AtomicU32::new(0x4270_0000); // 60.0

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temperature(t: f32) {
    SIM_TEMPERATURE_C.store(t.to_bits(), Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_humidity(rh: f32) {
    SIM_HUMIDITY_PCT.store(rh.to_bits(), Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_temperature() -> f32 {
    f32::from_bits(SIM_TEMPERATURE_C.load(Ordering::Relaxed))
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_humidity() -> f32 {
    f32::from_bits(SIM_HUMIDITY_PCT.load(Ordering::Relaxed))
}
