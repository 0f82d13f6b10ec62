//! Mock hardware, clock and event sink shared by the integration tests.

use std::cell::Cell;

use aeroloop::app::events::AppEvent;
use aeroloop::app::ports::{ActuatorPort, ClockPort, EventSink, RelayChannel, SensorPort};

/// Full mock of the board adapter: sensor values are plain fields the
/// test sets, actuator commands are recorded.
pub struct MockHw {
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub ph_raw: u16,
    pub echo_us: u32,
    pub light_raw: u16,

    pub relay_calls: Vec<(RelayChannel, bool)>,
    pub relay_state: [bool; RelayChannel::COUNT],
    pub moves: Vec<u32>,
    pending_steps: u32,
}

impl MockHw {
    /// Healthy defaults: 25 °C / 60 %RH (mid VPD band), pH ~6.0, echo
    /// giving a ~40 L reservoir, light below the rotation threshold.
    pub fn new() -> Self {
        Self {
            temperature_c: 25.0,
            humidity_pct: 60.0,
            ph_raw: 1_755,
            echo_us: 186,
            light_raw: 500,
            relay_calls: Vec::new(),
            relay_state: [false; RelayChannel::COUNT],
            moves: Vec::new(),
            pending_steps: 0,
        }
    }

    pub fn relay_on(&self, channel: RelayChannel) -> bool {
        self.relay_state[channel.index()]
    }

    /// Calls made to one relay channel, in order.
    pub fn calls_for(&self, channel: RelayChannel) -> Vec<bool> {
        self.relay_calls
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, on)| *on)
            .collect()
    }
}

impl SensorPort for MockHw {
    fn read_temperature_c(&mut self) -> f32 {
        self.temperature_c
    }
    fn read_humidity_pct(&mut self) -> f32 {
        self.humidity_pct
    }
    fn read_ph_raw(&mut self) -> u16 {
        self.ph_raw
    }
    fn read_echo_us(&mut self) -> u32 {
        self.echo_us
    }
    fn read_light_raw(&mut self) -> u16 {
        self.light_raw
    }
}

impl ActuatorPort for MockHw {
    fn set_relay(&mut self, channel: RelayChannel, on: bool) {
        self.relay_calls.push((channel, on));
        self.relay_state[channel.index()] = on;
    }

    fn start_move(&mut self, delta_steps: u32) {
        self.moves.push(delta_steps);
        self.pending_steps += delta_steps;
    }

    fn poll_move(&mut self) -> u32 {
        self.pending_steps = self.pending_steps.saturating_sub(1);
        self.pending_steps
    }
}

/// Manually advanced test clock.  `delay_ms` only accumulates, so the
/// blocking mix-settle is observable without real sleeping.
pub struct TestClock {
    pub now: Cell<u32>,
    pub delayed_ms: Cell<u32>,
}

impl TestClock {
    pub fn at(now: u32) -> Self {
        Self {
            now: Cell::new(now),
            delayed_ms: Cell::new(0),
        }
    }
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }

    fn delay_ms(&self, ms: u32) {
        self.delayed_ms.set(self.delayed_ms.get() + ms);
    }
}

/// Sink that keeps every emitted event.
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count_matching(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

/// Everything a scenario needs, wired together.
pub struct Rig {
    pub service: aeroloop::app::service::AppService,
    pub hw: MockHw,
    pub clk: TestClock,
    pub sink: RecordingSink,
}

impl Rig {
    pub fn boot_at(boot_ms: u32) -> Self {
        Self {
            service: aeroloop::app::service::AppService::new(
                aeroloop::config::SystemConfig::default(),
                boot_ms,
            ),
            hw: MockHw::new(),
            clk: TestClock::at(boot_ms),
            sink: RecordingSink::new(),
        }
    }

    pub fn new() -> Self {
        Self::boot_at(0)
    }

    /// Run one service tick at absolute time `t`.
    pub fn tick_at(&mut self, t: u32) {
        self.clk.now.set(t);
        self.service
            .tick(t, &mut self.hw, &self.clk, &mut self.sink);
    }

    /// Tick every `step_ms` from just after the current clock up to and
    /// including `until_ms`.  The span must be a multiple of `step_ms`.
    pub fn run_until(&mut self, until_ms: u32, step_ms: u32) {
        let mut t = self.clk.now.get();
        while t != until_ms {
            t = t.wrapping_add(step_ms);
            self.tick_at(t);
        }
    }
}
