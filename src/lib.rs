//! Aeroloop — environmental control firmware for an aeroponic growing
//! enclosure.
//!
//! Four subsystems share a single-threaded cooperative tick:
//!
//! * **Misting** — VPD-banded nutrient mist pulses.
//! * **pH** — timed acid/base dosing with agitation and settle.
//! * **Reservoir** — ultrasonic volume estimation recalibrating the dose.
//! * **Rotation** — light-triggered quarter turns of the plant carrier.
//!
//! Layering follows the hexagonal pattern: [`app`] is the pure domain
//! core behind port traits, [`adapters`] binds those ports to ESP-IDF
//! peripherals (or a host simulation), [`control`] holds the controller
//! logic, [`sensors`] and [`drivers`] the measurement and actuation
//! plumbing.

pub mod adapters;
pub mod app;
pub mod clock;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
