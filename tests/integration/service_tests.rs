//! Command handling, telemetry and the status surface.

use aeroloop::app::commands::AppCommand;
use aeroloop::app::events::{AppEvent, PhStatus};
use aeroloop::app::ports::RelayChannel;
use aeroloop::config::SystemConfig;

use crate::mock_hw::Rig;

#[test]
fn telemetry_is_emitted_on_its_own_cadence() {
    let mut rig = Rig::new();

    rig.run_until(30_000, 100);
    let reports = rig
        .sink
        .count_matching(|e| matches!(e, AppEvent::Telemetry(_)));
    assert_eq!(reports, 3, "10 s cadence over 30 s");
}

#[test]
fn status_report_mirrors_the_machine() {
    let mut rig = Rig::new();
    rig.hw.light_raw = 1_234;
    rig.tick_at(100);

    let status = rig.service.status();
    assert_eq!(status.temperature_c, Some(25.0));
    assert_eq!(status.humidity_pct, Some(60.0));
    assert!((status.vpd_kpa.unwrap() - 1.267).abs() < 0.005);
    assert!((status.ph - 6.0).abs() < 0.01);
    assert!((status.reservoir_volume_l.unwrap() - 40.0).abs() < 0.1);
    assert_eq!(status.light_raw, 1_234);
    assert!(!status.misting);
    assert_eq!(status.ph_status, PhStatus::Stable);
    assert!(!status.rotating);
    assert_eq!(status.carrier_angle_steps, 0);
    assert_eq!(status.light_threshold, 2_000);
    assert!((status.ph_target - 6.0).abs() < 0.001);
}

#[test]
fn status_serialises_for_the_dashboard() {
    let mut rig = Rig::new();
    rig.hw.ph_raw = 1_462; // will be dosing at the first check
    rig.run_until(30_000, 100);

    let status = rig.service.status();
    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["ph_status"], "adjusting");
    assert!(json["temperature_c"].is_number());
    assert!(json["misting"].is_boolean());
    assert!(json["carrier_angle_steps"].is_number());
}

#[test]
fn degraded_sensors_serialise_as_null() {
    let mut rig = Rig::new();
    rig.hw.temperature_c = f32::NAN;
    rig.hw.echo_us = 0;
    rig.tick_at(100);

    let json = serde_json::to_value(&rig.service.status()).unwrap();
    assert!(json["temperature_c"].is_null());
    assert!(json["vpd_kpa"].is_null());
    assert!(json["reservoir_volume_l"].is_null());
    assert!(json["humidity_pct"].is_number(), "humidity alone survives");
}

#[test]
fn lowering_the_light_threshold_enables_rotation() {
    let mut rig = Rig::new(); // default light 500, threshold 2000

    rig.run_until(5_000, 100);
    assert!(rig.hw.moves.is_empty());

    rig.service
        .handle_command(AppCommand::SetLightThreshold(400), &mut rig.sink);
    rig.run_until(10_000, 100);
    assert_eq!(rig.hw.moves, vec![50]);
    assert!(rig
        .sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::ConfigUpdated)));
}

#[test]
fn moving_the_ph_target_flips_the_pump_choice() {
    // pH reads ~5.0, out of range either way.  Target above the reading
    // doses base; target dragged below it doses acid.
    let mut rig = Rig::new();
    rig.hw.ph_raw = 1_462;
    rig.service
        .handle_command(AppCommand::SetPhTarget(4.0), &mut rig.sink);

    rig.run_until(30_000, 100);
    assert!(rig.hw.relay_on(RelayChannel::Acid));
    assert!(!rig.hw.relay_on(RelayChannel::Base));
}

#[test]
fn ph_target_is_applied_as_given() {
    // No input validation in the core: even an off-scale target is
    // accepted, the dashboard layer owns sanity-checking its users.
    let mut rig = Rig::new();
    rig.service
        .handle_command(AppCommand::SetPhTarget(17.0), &mut rig.sink);
    assert!((rig.service.config().ph_target - 17.0).abs() < 0.001);
    assert!(rig
        .sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::ConfigUpdated)));
}

#[test]
fn full_config_hot_reload() {
    let mut rig = Rig::new();
    let config = SystemConfig {
        light_threshold: 3_000,
        ph_target: 5.8,
        ..Default::default()
    };
    rig.service
        .handle_command(AppCommand::UpdateConfig(config), &mut rig.sink);

    assert_eq!(rig.service.config().light_threshold, 3_000);
    assert!((rig.service.config().ph_target - 5.8).abs() < 0.001);
}

#[test]
fn metrics_track_a_busy_run() {
    let mut rig = Rig::new();
    rig.hw.ph_raw = 1_462;
    rig.hw.light_raw = 2_500;

    rig.run_until(30_000, 100);
    let m = rig.service.metrics();
    assert!(m.ticks >= 300);
    assert!(m.mist_pulses >= 2);
    assert_eq!(m.doses, 1);
    assert_eq!(m.rotations, 6, "every 5 s over 30 s");
    assert_eq!(m.sensor_faults, 0);
}
