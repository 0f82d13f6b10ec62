//! Outbound application events and the read-only status surface.
//!
//! The [`AppService`](super::service::AppService) emits [`AppEvent`]s
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — log to serial, push to the
//! dashboard, etc.  [`StatusReport`] is the serialisable snapshot the
//! (external) HTTP layer renders; its fields mirror the dashboard cards.

use serde::Serialize;

use super::ports::DosePump;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Periodic status snapshot.
    Telemetry(StatusReport),

    /// Mist pump switched on (cycle start) or off (pulse complete).
    MistPulse { on: bool, interval_ms: u32 },

    /// A scheduled pH check ran without dosing (reading in range).
    PhChecked { ph: f32 },

    /// A dose began; the pump runs for `duration_ms`.
    DoseStarted {
        pump: DosePump,
        ph: f32,
        duration_ms: u32,
    },

    /// Dose complete: pumps released, reservoir agitated, settling.
    DoseSettled,

    /// Reservoir re-measured; dose length recalibrated.
    ReservoirMeasured {
        volume_l: f32,
        dosing_duration_ms: u32,
    },

    /// Carrier advance started (light above threshold).
    RotationStarted { light_raw: u16 },

    /// Carrier advance finished.
    RotationCompleted {
        steps: u32,
        carrier_angle_steps: u32,
    },

    /// A runtime tunable or the whole config was updated.
    ConfigUpdated,

    /// The application service has started.
    Started,
}

/// Dashboard-facing pH subsystem status (original UI: stable / adjusting /
/// settling cards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhStatus {
    Stable,
    Adjusting,
    Settling,
}

/// A point-in-time status snapshot for logging or the dashboard layer.
///
/// Derived sensor fields are `None` while the underlying reading is
/// invalid; the UI renders those as `--`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub temperature_c: Option<f32>,
    pub humidity_pct: Option<f32>,
    pub vpd_kpa: Option<f32>,
    pub ph: f32,
    pub water_level_cm: Option<f32>,
    pub reservoir_volume_l: Option<f32>,
    pub light_raw: u16,

    pub misting: bool,
    pub ph_status: PhStatus,
    pub rotating: bool,
    pub carrier_angle_steps: u32,

    pub light_threshold: u16,
    pub ph_target: f32,
}
