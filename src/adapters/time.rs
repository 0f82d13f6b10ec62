//! Monotonic clock adapter.
//!
//! On the board this wraps the ESP-IDF microsecond timer truncated to
//! `u32` milliseconds (rolls over after ~49.7 days, which the control core
//! handles — see [`crate::clock`]).  On the host it counts from process
//! start with `std::time::Instant`.

use crate::app::ports::ClockPort;

#[cfg(target_os = "espidf")]
pub struct SystemClock;

#[cfg(target_os = "espidf")]
impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl ClockPort for SystemClock {
    fn now_ms(&self) -> u32 {
        // esp_timer_get_time is µs since boot as i64; the truncation to
        // u32 ms is the wraparound the clock module is built for.
        (unsafe { esp_idf_sys::esp_timer_get_time() } / 1000) as u32
    }

    fn delay_ms(&self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }
}

#[cfg(not(target_os = "espidf"))]
pub struct SystemClock {
    boot: std::time::Instant,
}

#[cfg(not(target_os = "espidf"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            boot: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl ClockPort for SystemClock {
    fn now_ms(&self) -> u32 {
        self.boot.elapsed().as_millis() as u32
    }

    fn delay_ms(&self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
