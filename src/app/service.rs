//! The application service: one tick of the whole machine.
//!
//! `AppService` owns the [`ControlContext`] and runs the cooperative
//! schedule: read the clock, snapshot the sensors, then give each
//! controller its trigger check in a fixed order (misting, pH, reservoir,
//! rotation).  It also interprets inbound [`AppCommand`]s, maintains the
//! diagnostics counters, and emits periodic [`AppEvent::Telemetry`].

use log::info;

use crate::clock::{self, Millis};
use crate::config::SystemConfig;
use crate::control::context::{ControlContext, PhMode};
use crate::control::{misting, ph, reservoir, rotation};
use crate::diagnostics::Metrics;
use crate::sensors;

use super::commands::AppCommand;
use super::events::{AppEvent, PhStatus, StatusReport};
use super::ports::{ActuatorPort, ClockPort, EventSink, SensorPort};

pub struct AppService {
    ctx: ControlContext,
    metrics: Metrics,
    last_telemetry: Millis,
}

impl AppService {
    pub fn new(config: SystemConfig, boot_ms: Millis) -> Self {
        Self {
            ctx: ControlContext::new(config, boot_ms),
            metrics: Metrics::new(),
            last_telemetry: boot_ms,
        }
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        info!(
            "aeroloop starting: ph target {:.1}, light threshold {}",
            self.ctx.config.ph_target, self.ctx.config.light_threshold
        );
        sink.emit(&AppEvent::Started);
    }

    /// One pass of the cooperative schedule.
    pub fn tick(
        &mut self,
        now_ms: Millis,
        hw: &mut (impl SensorPort + ActuatorPort),
        clk: &impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.metrics.ticks += 1;
        self.ctx.now_ms = now_ms;

        let (snapshot, faults) = sensors::acquire(hw, &self.ctx.config);
        self.ctx.sensors = snapshot;
        for fault in &faults {
            self.metrics.record_sensor_fault(now_ms, *fault);
        }

        // Transition-derived counters: compare state before and after the
        // controllers run, so the counting logic never leaks into them.
        let was_pumping = self.ctx.misting.pumping;
        let was_mode = self.ctx.ph.mode;
        let was_angle = self.ctx.rotation.carrier_angle_steps;

        misting::tick(&mut self.ctx, hw, sink);
        ph::tick(&mut self.ctx, hw, clk, sink);
        reservoir::tick(&mut self.ctx, sink);
        rotation::tick(&mut self.ctx, hw, sink);

        if !was_pumping && self.ctx.misting.pumping {
            self.metrics.mist_pulses += 1;
        }
        if was_mode != PhMode::Dosing && self.ctx.ph.mode == PhMode::Dosing {
            self.metrics.doses += 1;
        }
        if self.ctx.rotation.carrier_angle_steps != was_angle {
            self.metrics.rotations += 1;
        }

        if clock::expired(now_ms, self.last_telemetry, self.ctx.config.telemetry_interval_ms) {
            self.last_telemetry = now_ms;
            sink.emit(&AppEvent::Telemetry(self.status()));
        }
    }

    /// Apply an inbound command from the dashboard or console.
    pub fn handle_command(&mut self, command: AppCommand, sink: &mut impl EventSink) {
        match command {
            AppCommand::SetLightThreshold(threshold) => {
                info!("light threshold -> {threshold}");
                self.ctx.config.light_threshold = threshold;
            }
            AppCommand::SetPhTarget(target) => {
                // Applied as given; the dashboard owns input validation.
                info!("ph target -> {target:.1}");
                self.ctx.config.ph_target = target;
            }
            AppCommand::UpdateConfig(config) => {
                info!("configuration hot-reloaded");
                self.ctx.config = config;
            }
        }
        sink.emit(&AppEvent::ConfigUpdated);
    }

    /// Current status snapshot for telemetry and the dashboard layer.
    pub fn status(&self) -> StatusReport {
        let s = &self.ctx.sensors;
        StatusReport {
            temperature_c: s.temperature_c,
            humidity_pct: s.humidity_pct,
            vpd_kpa: s.vpd_kpa,
            ph: s.ph,
            water_level_cm: s.water_level_cm,
            reservoir_volume_l: s.reservoir_volume_l,
            light_raw: s.light_raw,
            misting: self.ctx.misting.pumping,
            ph_status: match self.ctx.ph.mode {
                PhMode::Idle => PhStatus::Stable,
                PhMode::Dosing => PhStatus::Adjusting,
                PhMode::Waiting => PhStatus::Settling,
            },
            rotating: self.ctx.rotation.rotating,
            carrier_angle_steps: self.ctx.rotation.carrier_angle_steps,
            light_threshold: self.ctx.config.light_threshold,
            ph_target: self.ctx.config.ph_target,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn config(&self) -> &SystemConfig {
        &self.ctx.config
    }
}
