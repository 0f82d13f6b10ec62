//! System configuration parameters
//!
//! All tunable parameters for the Aeroloop enclosure.  Defaults match the
//! reference hardware (35 cm × Ø40 cm reservoir, 200 step/rev carrier
//! stepper, 12-bit ADC).  `light_threshold` and `ph_target` are the two
//! values the dashboard layer may change at runtime via `AppCommand`.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Misting ---
    /// Mist pump pulse length per cycle (milliseconds)
    pub mist_pump_duration_ms: u32,
    /// Cycle interval used at boot, before the first VPD reading lands
    pub mist_boot_interval_ms: u32,

    // --- pH correction ---
    /// Cadence of scheduled pH checks while idle (milliseconds)
    pub ph_check_interval_ms: u32,
    /// Post-dose settling time before the reading is trusted again
    pub ph_wait_interval_ms: u32,
    /// Agitation (mix pump) hold time after a dose (milliseconds)
    pub mix_settle_ms: u32,
    /// Dose below this pH (pH-up solution)
    pub ph_lower_limit: f32,
    /// Dose above this pH (pH-down solution)
    pub ph_upper_limit: f32,
    /// Target pH — selects acid vs base when dosing. Runtime tunable.
    pub ph_target: f32,
    /// Full-scale ADC count for the pH probe (4095 for 12-bit ESP32,
    /// 1023 for the 10-bit AVR variant)
    pub ph_adc_full_scale: u16,

    // --- Reservoir ---
    /// Cylindrical reservoir radius (cm)
    pub reservoir_radius_cm: f32,
    /// Mounting height of the ultrasonic transceiver above the tank floor (cm)
    pub reservoir_height_cm: f32,
    /// Re-measurement cadence for volume / dose recalibration (milliseconds)
    pub reservoir_check_interval_ms: u32,
    /// Dose strength: fraction of a second of pump run time per litre,
    /// scaled by 1e6 into milliseconds (reference: 1 mL per 4 L)
    pub dosage_rate: f32,

    // --- Carrier rotation ---
    /// Light check cadence (milliseconds)
    pub rotation_interval_ms: u32,
    /// Full steps per carrier revolution; one move is a quarter turn
    pub steps_per_revolution: u32,
    /// Raw LDR reading above which the carrier advances. Runtime tunable.
    pub light_threshold: u16,

    // --- Telemetry ---
    /// Status report emission cadence (milliseconds)
    pub telemetry_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Misting
            mist_pump_duration_ms: 5_000,
            mist_boot_interval_ms: 1_200,

            // pH
            ph_check_interval_ms: 30_000,
            ph_wait_interval_ms: 18_000,
            mix_settle_ms: 1_000,
            ph_lower_limit: 5.5,
            ph_upper_limit: 6.5,
            ph_target: 6.0,
            ph_adc_full_scale: 4_095,

            // Reservoir
            reservoir_radius_cm: 20.0,
            reservoir_height_cm: 35.0,
            reservoir_check_interval_ms: 3_600,
            dosage_rate: 0.000_25,

            // Rotation
            rotation_interval_ms: 5_000,
            steps_per_revolution: 200,
            light_threshold: 2_000,

            // Telemetry
            telemetry_interval_ms: 10_000,
        }
    }
}

impl SystemConfig {
    /// Steps in one commanded carrier move (90°).
    pub fn quarter_turn_steps(&self) -> u32 {
        self.steps_per_revolution / 4
    }
}
