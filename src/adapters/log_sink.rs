//! Event sink that renders application events onto the log.
//!
//! Telemetry snapshots go out as one JSON line so the serial console can
//! be scraped by the same tooling that reads the dashboard status feed;
//! everything else gets a short human-readable line.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(report) => match serde_json::to_string(report) {
                Ok(json) => info!("status {json}"),
                Err(e) => warn!("status serialisation failed: {e}"),
            },
            AppEvent::MistPulse { on, interval_ms } => {
                if *on {
                    info!("mist pump on (cycle {interval_ms} ms)");
                } else {
                    info!("mist pump off");
                }
            }
            AppEvent::PhChecked { ph } => info!("ph check: {ph:.2}, in range"),
            AppEvent::DoseStarted {
                pump,
                ph,
                duration_ms,
            } => info!("ph check: {ph:.2}, dosing {pump:?} for {duration_ms} ms"),
            AppEvent::DoseSettled => info!("dose settled, recheck pending"),
            AppEvent::ReservoirMeasured {
                volume_l,
                dosing_duration_ms,
            } => info!("reservoir {volume_l:.1} L, dose length {dosing_duration_ms} ms"),
            AppEvent::RotationStarted { light_raw } => {
                info!("carrier rotation start (light {light_raw})");
            }
            AppEvent::RotationCompleted {
                steps,
                carrier_angle_steps,
            } => info!("carrier advanced {steps} steps (total {carrier_angle_steps})"),
            AppEvent::ConfigUpdated => info!("configuration updated"),
            AppEvent::Started => info!("control loop started"),
        }
    }
}
