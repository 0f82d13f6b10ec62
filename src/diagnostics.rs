//! Runtime counters and a small fault ring.
//!
//! Sensor faults are routine on this hardware (wet enclosure, long probe
//! leads), so they are counted and ringed rather than escalated.  The
//! ring keeps the most recent faults with their timestamps for the serial
//! console to dump on demand.

use crate::clock::Millis;
use crate::error::SensorError;

/// Most recent faults kept for inspection.
pub const FAULT_RING_CAPACITY: usize = 16;

/// One recorded sensor fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultRecord {
    pub at_ms: Millis,
    pub error: SensorError,
}

/// Counters accumulated over the life of the control loop.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Scheduler passes executed.
    pub ticks: u64,
    /// Mist pump activations.
    pub mist_pulses: u32,
    /// pH doses started (acid and base combined).
    pub doses: u32,
    /// Quarter-turn carrier rotations completed.
    pub rotations: u32,
    /// Total sensor faults observed.
    pub sensor_faults: u32,
    /// The last [`FAULT_RING_CAPACITY`] faults, oldest first.
    pub recent_faults: heapless::Deque<FaultRecord, FAULT_RING_CAPACITY>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a fault and push it into the ring, evicting the oldest when
    /// full.
    pub fn record_sensor_fault(&mut self, at_ms: Millis, error: SensorError) {
        self.sensor_faults += 1;
        if self.recent_faults.is_full() {
            self.recent_faults.pop_front();
        }
        let _ = self.recent_faults.push_back(FaultRecord { at_ms, error });
    }
}
