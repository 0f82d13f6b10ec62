//! pH controller — check, dose, agitate, settle.
//!
//! Three-state sequencer:
//!
//! ```text
//!  Idle ──[30 s check, out of range]──▶ Dosing ──[dose done]──▶ Waiting
//!    ▲                                                             │
//!    └──────────────[18 s settle, back in range]───────────────────┘
//!              (still out of range: Waiting ──▶ Dosing directly)
//! ```
//!
//! Every check re-arms `last_check` whether or not it doses, and it is
//! left alone until the next check: the 18 s wait window opens at dose
//! start and spans the dose plus the settle.  The dose length itself is
//! owned by the reservoir monitor — this controller just reads it when
//! dosing begins.
//!
//! The Dosing→Waiting transition contains the one intentionally blocking
//! step in the whole core: the mix pump must agitate the reservoir before
//! the next reading means anything, so it holds the thread for the fixed
//! settle time (1 s on the reference hardware).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, ClockPort, DosePump, EventSink, RelayChannel};
use crate::clock;
use crate::control::context::{ControlContext, PhMode};

/// One scheduler pass for the pH subsystem.
pub fn tick(
    ctx: &mut ControlContext,
    hw: &mut impl ActuatorPort,
    clk: &impl ClockPort,
    sink: &mut impl EventSink,
) {
    let now = ctx.now_ms;

    match ctx.ph.mode {
        PhMode::Idle => {
            if clock::expired(now, ctx.ph.last_check, ctx.config.ph_check_interval_ms) {
                check_and_dose(ctx, hw, sink);
            }
        }

        PhMode::Dosing => {
            if clock::expired(now, ctx.ph.last_check, ctx.ph.dosing_duration_ms) {
                // Strict ordering: both dose pumps off before the mix pump
                // comes on, mix pump off before the state reads Waiting.
                hw.set_relay(RelayChannel::Acid, false);
                hw.set_relay(RelayChannel::Base, false);
                hw.set_relay(RelayChannel::Mix, true);
                clk.delay_ms(ctx.config.mix_settle_ms);
                hw.set_relay(RelayChannel::Mix, false);

                // last_check stays at the dose start: the 18 s wait spans
                // dose + settle, so the recheck lands 18 s after dosing
                // began regardless of the dose length.
                ctx.ph.mode = PhMode::Waiting;
                info!("ph: dose complete, settling before recheck");
                sink.emit(&AppEvent::DoseSettled);
            }
        }

        PhMode::Waiting => {
            if clock::expired(now, ctx.ph.last_check, ctx.config.ph_wait_interval_ms) {
                ctx.ph.mode = PhMode::Idle;
                // Re-run the check immediately; Waiting -> Dosing without
                // passing a full Idle interval is legal and expected when
                // the pH is still out of range.
                check_and_dose(ctx, hw, sink);
            }
        }
    }
}

/// Read the snapshot pH and start a dose if it is out of range.  Always
/// re-arms the check timer.
fn check_and_dose(ctx: &mut ControlContext, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
    ctx.ph.last_check = ctx.now_ms;
    let ph = ctx.sensors.ph;

    if ph < ctx.config.ph_lower_limit || ph > ctx.config.ph_upper_limit {
        let pump = if ph < ctx.config.ph_target {
            DosePump::Base
        } else {
            DosePump::Acid
        };
        hw.set_relay(pump.relay(), true);
        ctx.ph.mode = PhMode::Dosing;
        info!(
            "ph: {:.2} out of range, dosing {:?} for {} ms",
            ph, pump, ctx.ph.dosing_duration_ms
        );
        sink.emit(&AppEvent::DoseStarted {
            pump,
            ph,
            duration_ms: ctx.ph.dosing_duration_ms,
        });
    } else {
        info!("ph: {:.2} within range", ph);
        sink.emit(&AppEvent::PhChecked { ph });
    }
}
