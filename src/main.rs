//! Firmware entry point (ESP32-S3, requires the `espidf` feature).

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::peripherals::Peripherals;

use aeroloop::adapters::{HardwareAdapter, LogEventSink, SystemClock};
use aeroloop::app::ports::ClockPort;
use aeroloop::app::service::AppService;
use aeroloop::config::SystemConfig;

/// Scheduler pace.  Every controller interval is ≥ 1 s, so a 10 ms tick
/// gives ample timing resolution while yielding to the idle task.
const TICK_PERIOD_MS: u32 = 10;

fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    log::info!(
        "aeroloop {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_NAME")
    );

    let peripherals = Peripherals::take()?;
    let mut hw = HardwareAdapter::new(peripherals)?;
    let clk = SystemClock::new();
    let mut sink = LogEventSink::new();

    let mut service = AppService::new(SystemConfig::default(), clk.now_ms());
    service.start(&mut sink);

    loop {
        service.tick(clk.now_ms(), &mut hw, &clk, &mut sink);
        FreeRtos::delay_ms(TICK_PERIOD_MS);
    }
}
