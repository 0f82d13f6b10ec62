//! GPIO / peripheral pin assignments for the Aeroloop main board (ESP32-S3).
//!
//! Single source of truth — every adapter references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Relay board (4-channel, opto-isolated, active LOW)
// ---------------------------------------------------------------------------

/// Nutrient mist pump relay.
pub const MIST_RELAY_GPIO: i32 = 2;
/// Acid dosing pump relay (pH-down solution).
pub const ACID_RELAY_GPIO: i32 = 3;
/// Base dosing pump relay (pH-up solution).
pub const BASE_RELAY_GPIO: i32 = 4;
/// Reservoir agitation (mix) pump relay.
pub const MIX_RELAY_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// pH probe amplifier output. ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const PH_ADC_GPIO: i32 = 1;
/// LDR light sensor via resistive divider. ADC1 channel 7 (GPIO 8).
pub const LIGHT_ADC_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Sensors — Digital / Pulse
// ---------------------------------------------------------------------------

/// HC-SR04 ultrasonic trigger (output).
pub const ULTRASONIC_TRIG_GPIO: i32 = 6;
/// HC-SR04 ultrasonic echo (input, 5 V via level shifter).
pub const ULTRASONIC_ECHO_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Carrier stepper (A4988 step/dir driver)
// ---------------------------------------------------------------------------

/// Step pulse output — one rising edge per motor step.
pub const STEPPER_STEP_GPIO: i32 = 9;
/// Direction output — held HIGH, the carrier rotates one way only.
pub const STEPPER_DIR_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// I²C bus (SHT31 temperature / humidity sensor)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 41;
pub const I2C_SCL_GPIO: i32 = 42;

/// SHT31 fixed I²C address (ADDR pin low).
pub const SHT31_I2C_ADDR: u8 = 0x44;
