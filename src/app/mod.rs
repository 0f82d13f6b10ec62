//! Application core — pure domain logic, zero I/O.
//!
//! This module wires the four controllers in [`crate::control`] into one
//! cooperative tick and exposes the command/status surface.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
