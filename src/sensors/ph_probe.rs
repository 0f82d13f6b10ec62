//! Analog pH probe scaling.
//!
//! The probe board outputs a voltage the ADC reads as a raw count; the
//! count maps linearly onto the 0–14 pH scale.  The full-scale count is a
//! config value so the same firmware serves the 12-bit ESP32 board and
//! the older 10-bit AVR carrier.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

/// Map a raw ADC count onto the pH scale, clamped to [0, 14].
pub fn ph_from_raw(raw: u16, full_scale: u16) -> f32 {
    let ph = raw as f32 / full_scale as f32 * 14.0;
    ph.clamp(0.0, 14.0)
}

#[cfg(not(target_os = "espidf"))]
static SIM_PH_RAW: AtomicU16 = AtomicU16::new(1_755); // ~6.0 pH at 12-bit

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_ph_raw(raw: u16) {
    SIM_PH_RAW.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_ph_raw() -> u16 {
    SIM_PH_RAW.load(Ordering::Relaxed)
}
