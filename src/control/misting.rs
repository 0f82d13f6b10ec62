//! Misting controller — VPD-banded mist pulses.
//!
//! Two-state timer: `Idle → Pumping → Idle`.  At each cycle start the
//! cycle length is rebanded from the latest vapor-pressure deficit: dry
//! air (high VPD) mists often, humid air (low VPD) rarely.  The pump-on
//! and pump-off guards both run every tick and guard disjoint
//! transitions, so their order does not matter.
//!
//! An invalid SHT31 read never halts the subsystem: a cycle start with no
//! VPD rebands from an assumed nominal climate instead.  Falling back
//! matters because the boot cycle (1.2 s) is shorter than the pump pulse
//! (5 s): a cadence stuck below the pulse length would re-arm the cycle
//! before the pump-off guard could ever fire and latch the pump on.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, EventSink, RelayChannel};
use crate::clock;
use crate::control::context::ControlContext;
use crate::sensors::sht31;

/// Above this VPD the air is drying fast — mist on the short cycle.
pub const VPD_HIGH_KPA: f32 = 1.5;
/// Below this VPD the canopy stays wet — mist on the long cycle.
pub const VPD_LOW_KPA: f32 = 0.8;

pub const INTERVAL_HIGH_MS: u32 = 6_000;
pub const INTERVAL_MID_MS: u32 = 12_000;
pub const INTERVAL_LOW_MS: u32 = 18_000;

/// Climate assumed while the SHT31 is unreadable (nominal enclosure air,
/// lands in the middle band).
pub const FALLBACK_TEMPERATURE_C: f32 = 25.0;
pub const FALLBACK_HUMIDITY_PCT: f32 = 60.0;

/// Discrete cycle-interval band for a VPD reading.
///
/// The comparisons are strict: a VPD of exactly 0.8 or 1.5 kPa resolves
/// to the middle band.
pub fn interval_for_vpd(vpd_kpa: f32) -> u32 {
    if vpd_kpa > VPD_HIGH_KPA {
        INTERVAL_HIGH_MS
    } else if vpd_kpa < VPD_LOW_KPA {
        INTERVAL_LOW_MS
    } else {
        INTERVAL_MID_MS
    }
}

/// One scheduler pass for the misting subsystem.
pub fn tick(ctx: &mut ControlContext, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
    let now = ctx.now_ms;

    // Cycle start: re-arm, reband from VPD, switch the pump on.
    if clock::expired(now, ctx.misting.last_cycle_start, ctx.misting.cycle_interval_ms) {
        ctx.misting.last_cycle_start = now;

        match ctx.sensors.vpd_kpa {
            Some(vpd) => {
                ctx.misting.cycle_interval_ms = interval_for_vpd(vpd);
                info!(
                    "misting: VPD {:.2} kPa -> cycle {} s",
                    vpd,
                    ctx.misting.cycle_interval_ms / 1000
                );
            }
            None => {
                let assumed = sht31::vpd_kpa(FALLBACK_TEMPERATURE_C, FALLBACK_HUMIDITY_PCT);
                ctx.misting.cycle_interval_ms = interval_for_vpd(assumed);
                warn!(
                    "misting: VPD unavailable, assuming nominal climate -> cycle {} s",
                    ctx.misting.cycle_interval_ms / 1000
                );
            }
        }

        hw.set_relay(RelayChannel::Mist, true);
        ctx.misting.pumping = true;
        sink.emit(&AppEvent::MistPulse {
            on: true,
            interval_ms: ctx.misting.cycle_interval_ms,
        });
    }

    // Pulse end: fixed pump duration measured from the same cycle start.
    if ctx.misting.pumping
        && clock::expired(
            now,
            ctx.misting.last_cycle_start,
            ctx.config.mist_pump_duration_ms,
        )
    {
        hw.set_relay(RelayChannel::Mist, false);
        ctx.misting.pumping = false;
        sink.emit(&AppEvent::MistPulse {
            on: false,
            interval_ms: ctx.misting.cycle_interval_ms,
        });
    }
}
