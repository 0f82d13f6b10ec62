//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (the dashboard's
//! `/control` endpoint, serial console, tests) that the
//! [`AppService`](super::service::AppService) interprets and acts upon.
//!
//! Values are applied as given — the core does not second-guess an
//! out-of-range threshold or target (see the error-handling design);
//! physical quantities are clamped only where they could go negative.

use crate::config::SystemConfig;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Set the raw light level above which the carrier rotates.
    SetLightThreshold(u16),

    /// Set the pH the dosing controller steers toward.
    SetPhTarget(f32),

    /// Hot-reload the full configuration.
    UpdateConfig(SystemConfig),
}
