//! Sensor acquisition and validation.
//!
//! The [`SensorPort`] hands us raw primitives (degrees, counts, echo
//! microseconds); this module owns the policy for turning those into a
//! trustworthy [`SensorSnapshot`].  Invalid inputs never become derived
//! values — a NaN temperature gives `vpd_kpa: None`, an echo timeout gives
//! `reservoir_volume_l: None` — and every rejection is returned as a
//! [`SensorError`] so the service can count it in diagnostics.

pub mod light;
pub mod ph_probe;
pub mod sht31;
pub mod ultrasonic;

use crate::app::ports::SensorPort;
use crate::config::SystemConfig;
use crate::control::context::SensorSnapshot;
use crate::control::reservoir;
use crate::error::SensorError;

/// Plausible SHT31 temperature range (°C, datasheet operating limits).
const TEMP_MIN_C: f32 = -40.0;
const TEMP_MAX_C: f32 = 125.0;

/// Faults from a single acquisition pass.  At most one per physical
/// sensor, so the bound is small and fixed.
pub type Faults = heapless::Vec<SensorError, 4>;

/// Read every sensor once and build a validated snapshot.
pub fn acquire(hw: &mut impl SensorPort, config: &SystemConfig) -> (SensorSnapshot, Faults) {
    let mut faults = Faults::new();

    let temperature_c = validate_temperature(hw.read_temperature_c())
        .map_err(|e| record(&mut faults, e))
        .ok();
    let humidity_pct = validate_humidity(hw.read_humidity_pct())
        .map_err(|e| record(&mut faults, e))
        .ok();

    let vpd_kpa = match (temperature_c, humidity_pct) {
        (Some(t), Some(rh)) => Some(sht31::vpd_kpa(t, rh)),
        _ => None,
    };

    let ph = ph_probe::ph_from_raw(hw.read_ph_raw(), config.ph_adc_full_scale);

    let water_level_cm = ultrasonic::level_from_echo(hw.read_echo_us(), config.reservoir_height_cm)
        .map_err(|e| record(&mut faults, e))
        .ok();
    let reservoir_volume_l =
        water_level_cm.map(|level| reservoir::volume_l(config.reservoir_radius_cm, level));

    let light_raw = hw.read_light_raw();

    (
        SensorSnapshot {
            temperature_c,
            humidity_pct,
            vpd_kpa,
            ph,
            water_level_cm,
            reservoir_volume_l,
            light_raw,
        },
        faults,
    )
}

fn record(faults: &mut Faults, e: SensorError) {
    // Capacity is one slot per physical sensor; a push can't actually fail.
    let _ = faults.push(e);
}

fn validate_temperature(t: f32) -> Result<f32, SensorError> {
    if t.is_nan() {
        Err(SensorError::NotANumber)
    } else if !(TEMP_MIN_C..=TEMP_MAX_C).contains(&t) {
        Err(SensorError::OutOfRange)
    } else {
        Ok(t)
    }
}

fn validate_humidity(rh: f32) -> Result<f32, SensorError> {
    if rh.is_nan() {
        Err(SensorError::NotANumber)
    } else if !(0.0..=100.0).contains(&rh) {
        Err(SensorError::OutOfRange)
    } else {
        Ok(rh)
    }
}
