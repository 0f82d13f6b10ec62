//! Reservoir monitor.
//!
//! Periodically converts the ultrasonic water-level reading into a volume
//! estimate and recalibrates the pH dose duration from it.  A smaller
//! reservoir gets proportionally shorter doses, so correction strength
//! tracks the actual liquid mass rather than a fixed guess.

use core::f32::consts::PI;

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::clock;
use crate::control::context::ControlContext;

/// Cylinder volume in litres for a given fill level.  Levels at or below
/// zero (sensor reading above the brim) clamp to empty.
pub fn volume_l(radius_cm: f32, level_cm: f32) -> f32 {
    if level_cm <= 0.0 {
        return 0.0;
    }
    PI * radius_cm * radius_cm * level_cm / 1000.0
}

/// Dose pulse length for a reservoir of `volume_l` litres at the
/// configured dosage rate (seconds of pumping per litre, times 1e6 to
/// land in milliseconds).
pub fn dosing_duration_ms(volume_l: f32, dosage_rate: f32) -> u32 {
    (volume_l * dosage_rate * 1_000_000.0) as u32
}

/// One scheduler pass for the reservoir subsystem.
pub fn tick(ctx: &mut ControlContext, sink: &mut impl EventSink) {
    if !clock::expired(
        ctx.now_ms,
        ctx.reservoir.last_check,
        ctx.config.reservoir_check_interval_ms,
    ) {
        return;
    }
    ctx.reservoir.last_check = ctx.now_ms;

    match ctx.sensors.reservoir_volume_l {
        Some(volume) => {
            let duration = dosing_duration_ms(volume, ctx.config.dosage_rate);
            ctx.reservoir.volume_l = Some(volume);
            ctx.ph.dosing_duration_ms = duration;
            info!(
                "reservoir: {:.1} L, dose duration now {} ms",
                volume, duration
            );
            sink.emit(&AppEvent::ReservoirMeasured {
                volume_l: volume,
                dosing_duration_ms: duration,
            });
        }
        None => {
            // Echo timed out or level was implausible; keep the previous
            // calibration rather than dosing on garbage.
            warn!("reservoir: no valid level reading, keeping previous dose duration");
        }
    }
}
