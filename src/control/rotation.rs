//! Carrier rotation.
//!
//! Every `rotation_interval_ms` the light sensor is sampled; a reading
//! above the threshold turns the plant carrier a quarter revolution so
//! all sides see the lamp.  The stepper move runs to completion within
//! the tick — the mechanism is fast relative to the control timescales
//! and a half-finished quarter turn would leave the carrier misaligned.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, EventSink};
use crate::clock;
use crate::control::context::ControlContext;

/// One scheduler pass for the rotation subsystem.
pub fn tick(ctx: &mut ControlContext, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
    if !clock::expired(
        ctx.now_ms,
        ctx.rotation.last_check,
        ctx.config.rotation_interval_ms,
    ) {
        return;
    }
    ctx.rotation.last_check = ctx.now_ms;

    let light = ctx.sensors.light_raw;
    if light <= ctx.config.light_threshold {
        return;
    }

    let steps = ctx.config.quarter_turn_steps();
    ctx.rotation.rotating = true;
    info!("rotation: light {} over threshold, stepping {}", light, steps);
    sink.emit(&AppEvent::RotationStarted { light_raw: light });

    hw.start_move(steps);
    while hw.poll_move() != 0 {}

    ctx.rotation.carrier_angle_steps = ctx.rotation.carrier_angle_steps.wrapping_add(steps);
    ctx.rotation.rotating = false;
    sink.emit(&AppEvent::RotationCompleted {
        steps,
        carrier_angle_steps: ctx.rotation.carrier_angle_steps,
    });
}
