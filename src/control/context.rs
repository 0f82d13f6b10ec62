//! Shared mutable context threaded through every controller tick.
//!
//! `ControlContext` is the single struct the four controllers read from and
//! write to: the per-tick sensor snapshot, each subsystem's timer/state
//! fields, and the live configuration.  Ownership rules from the design:
//! every controller owns its own state block, except that
//! `PhState.dosing_duration_ms` is written only by the reservoir monitor
//! and read by the pH controller at the moment dosing begins.

use crate::clock::Millis;
use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Sensor snapshot (written once per tick; read-only to controllers)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every sensor in the system.
///
/// Raw fields can be invalid (sensor fault); the derived fields
/// (`vpd_kpa`, `reservoir_volume_l`) propagate that invalidity as `None`
/// instead of computing garbage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorSnapshot {
    /// Air temperature (°C); `None` on SHT31 fault.
    pub temperature_c: Option<f32>,
    /// Relative humidity (%RH); `None` on SHT31 fault.
    pub humidity_pct: Option<f32>,
    /// Vapor-pressure deficit (kPa), derived from temperature + humidity.
    pub vpd_kpa: Option<f32>,
    /// Nutrient solution pH on the 0–14 scale.
    pub ph: f32,
    /// Water level above the tank floor (cm, clamped ≥ 0); `None` on
    /// echo timeout.
    pub water_level_cm: Option<f32>,
    /// Reservoir volume (litres), derived from the water level.
    pub reservoir_volume_l: Option<f32>,
    /// Raw LDR light intensity.
    pub light_raw: u16,
}

// ---------------------------------------------------------------------------
// Per-controller state blocks
// ---------------------------------------------------------------------------

/// Misting controller state (two-state pulse timer).
#[derive(Debug, Clone, Copy)]
pub struct MistingState {
    /// When the current cycle began (also the pump-on instant).
    pub last_cycle_start: Millis,
    /// Current cycle length; recomputed from VPD at each cycle start.
    pub cycle_interval_ms: u32,
    /// True only between pump-on and pump-off within one cycle.
    pub pumping: bool,
}

/// pH controller mode.  At most one of `Dosing` / `Waiting` is active;
/// the enum makes that structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhMode {
    /// Waiting for the next scheduled check.
    Idle,
    /// Acid or base pump running.
    Dosing,
    /// Post-dose settling before the reading is trusted again.
    Waiting,
}

/// pH controller state (three-state sequencer).
#[derive(Debug, Clone, Copy)]
pub struct PhState {
    /// Re-armed on every check; the settle wait is measured from this
    /// same stamp, i.e. from dose start.
    pub last_check: Millis,
    /// Dose pump run time.  Written only by the reservoir monitor.
    pub dosing_duration_ms: u32,
    pub mode: PhMode,
}

/// Reservoir monitor state.
#[derive(Debug, Clone, Copy)]
pub struct ReservoirState {
    pub last_check: Millis,
    /// Last good measured volume (litres); `None` until the first
    /// successful measurement.
    pub volume_l: Option<f32>,
}

/// Rotation controller state.
#[derive(Debug, Clone, Copy)]
pub struct RotationState {
    pub last_check: Millis,
    /// Cumulative commanded steps; only ever increases (the carrier
    /// rotates one direction).
    pub carrier_angle_steps: u32,
    /// True only while a commanded move has outstanding steps.
    pub rotating: bool,
}

// ---------------------------------------------------------------------------
// ControlContext
// ---------------------------------------------------------------------------

/// The blackboard passed by mutable reference to every controller tick.
pub struct ControlContext {
    /// Clock reading for the current tick (read once, shared by all).
    pub now_ms: Millis,
    /// Latest sensor readings.  Updated before the controllers run.
    pub sensors: SensorSnapshot,
    /// Live configuration (tunables mutable via `AppCommand`).
    pub config: SystemConfig,

    pub misting: MistingState,
    pub ph: PhState,
    pub reservoir: ReservoirState,
    pub rotation: RotationState,
}

impl ControlContext {
    /// Create a context at boot time.  All timers arm relative to
    /// `boot_ms`, so each controller first triggers one full interval
    /// after start.
    pub fn new(config: SystemConfig, boot_ms: Millis) -> Self {
        let misting = MistingState {
            last_cycle_start: boot_ms,
            cycle_interval_ms: config.mist_boot_interval_ms,
            pumping: false,
        };
        let ph = PhState {
            last_check: boot_ms,
            dosing_duration_ms: 0,
            mode: PhMode::Idle,
        };
        let reservoir = ReservoirState {
            last_check: boot_ms,
            volume_l: None,
        };
        let rotation = RotationState {
            last_check: boot_ms,
            carrier_angle_steps: 0,
            rotating: false,
        };
        Self {
            now_ms: boot_ms,
            sensors: SensorSnapshot::default(),
            config,
            misting,
            ph,
            reservoir,
            rotation,
        }
    }
}
