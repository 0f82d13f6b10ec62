//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, clock, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the control core never touches hardware directly and the
//! whole loop runs against mocks on the host target.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: raw sensor primitives, one call per physical reading.
///
/// Validation and unit conversion happen in the domain
/// ([`sensors::acquire`](crate::sensors::acquire)) so that the "invalid
/// reading" policy lives in exactly one place.
pub trait SensorPort {
    /// Air temperature in °C.  NaN when the SHT31 read failed.
    fn read_temperature_c(&mut self) -> f32;

    /// Relative humidity in %RH.  NaN when the SHT31 read failed.
    fn read_humidity_pct(&mut self) -> f32;

    /// Raw pH probe ADC count (device full scale, see config).
    fn read_ph_raw(&mut self) -> u16;

    /// Ultrasonic echo round-trip time in µs.  0 when the echo timed out.
    fn read_echo_us(&mut self) -> u32;

    /// Raw LDR light reading.
    fn read_light_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// One of the four dosing/misting relays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayChannel {
    /// Nutrient mist pump.
    Mist,
    /// pH-down (acid) dosing pump.
    Acid,
    /// pH-up (base) dosing pump.
    Base,
    /// Reservoir agitation pump.
    Mix,
}

impl RelayChannel {
    /// Number of relay channels (for state arrays in adapters and mocks).
    pub const COUNT: usize = 4;

    /// Stable array index for this channel.
    pub fn index(self) -> usize {
        match self {
            Self::Mist => 0,
            Self::Acid => 1,
            Self::Base => 2,
            Self::Mix => 3,
        }
    }
}

/// Which dosing pump a pH correction uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosePump {
    Acid,
    Base,
}

impl DosePump {
    /// The relay channel driving this pump.
    pub fn relay(self) -> RelayChannel {
        match self {
            Self::Acid => RelayChannel::Acid,
            Self::Base => RelayChannel::Base,
        }
    }
}

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Energise (`true`) or release (`false`) a relay channel.
    fn set_relay(&mut self, channel: RelayChannel, on: bool);

    /// Command the carrier stepper to advance by `delta_steps` full steps.
    fn start_move(&mut self, delta_steps: u32);

    /// Execute pending step work.  Returns steps remaining; the rotation
    /// controller polls this to completion (bounded, a few ms of work).
    fn poll_move(&mut self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: domain ← monotonic time)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock plus the one bounded blocking delay the
/// core is allowed (the post-dose mix-settle hold).
pub trait ClockPort {
    /// Milliseconds since boot; wraps at `u32::MAX` (see [`crate::clock`]).
    fn now_ms(&self) -> u32;

    /// Block the control thread for `ms` milliseconds.  Only the pH
    /// controller's mix-settle step may call this.
    fn delay_ms(&self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log in production, a `Vec` in tests; a
/// dashboard push adapter would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
