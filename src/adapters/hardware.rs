//! The board adapter: [`SensorPort`] + [`ActuatorPort`] in one struct.
//!
//! Two compile-time variants share the same shape:
//!
//! * **espidf** — real peripherals per [`crate::pins`]: SHT31 over I²C,
//!   pH probe and LDR on ADC1, HC-SR04 on two GPIOs, four active-low
//!   relays and an A4988 step/dir pair.
//! * **host** — relays and the stepper run against [`SimPin`]s, sensor
//!   reads come from the simulation statics in [`crate::sensors`].  This
//!   variant backs `cargo test` and desk runs of the control loop.

use crate::app::ports::{ActuatorPort, RelayChannel, SensorPort};
use crate::drivers::{Relay, Stepper};

// ═══════════════════════════════════════════════════════════════
//  Host simulation variant
// ═══════════════════════════════════════════════════════════════

#[cfg(not(target_os = "espidf"))]
mod host {
    use super::*;
    use crate::drivers::SimPin;
    use crate::sensors::{light, ph_probe, sht31, ultrasonic};

    pub struct HardwareAdapter {
        relays: [Relay<SimPin>; RelayChannel::COUNT],
        stepper: Stepper<SimPin, SimPin>,
    }

    impl HardwareAdapter {
        pub fn new() -> anyhow::Result<Self> {
            // SimPin is infallible; the Results exist to mirror the
            // board variant's signature.
            let relays = [
                Relay::new(SimPin::new())?,
                Relay::new(SimPin::new())?,
                Relay::new(SimPin::new())?,
                Relay::new(SimPin::new())?,
            ];
            let stepper = Stepper::new(SimPin::new(), SimPin::new())?;
            Ok(Self { relays, stepper })
        }

        /// Test hook: current commanded state of a relay channel.
        pub fn relay_is_on(&self, channel: RelayChannel) -> bool {
            self.relays[channel.index()].is_on()
        }

        /// Test hook: total steps the carrier stepper has issued.
        pub fn stepper_position(&self) -> u32 {
            self.stepper.position()
        }
    }

    impl SensorPort for HardwareAdapter {
        fn read_temperature_c(&mut self) -> f32 {
            sht31::sim_temperature()
        }

        fn read_humidity_pct(&mut self) -> f32 {
            sht31::sim_humidity()
        }

        fn read_ph_raw(&mut self) -> u16 {
            ph_probe::sim_ph_raw()
        }

        fn read_echo_us(&mut self) -> u32 {
            ultrasonic::sim_echo_us()
        }

        fn read_light_raw(&mut self) -> u16 {
            light::sim_light_raw()
        }
    }

    impl ActuatorPort for HardwareAdapter {
        fn set_relay(&mut self, channel: RelayChannel, on: bool) {
            let _ = self.relays[channel.index()].set(on); // Infallible
        }

        fn start_move(&mut self, delta_steps: u32) {
            self.stepper.move_relative(delta_steps);
        }

        fn poll_move(&mut self) -> u32 {
            self.stepper.run().unwrap_or(0) // Infallible
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub use host::HardwareAdapter;


// ═══════════════════════════════════════════════════════════════
//  ESP-IDF board variant
// ═══════════════════════════════════════════════════════════════

#[cfg(target_os = "espidf")]
mod board {
    use super::*;

    use esp_idf_hal::delay::{Ets, BLOCK};
    use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver};
    use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
    use esp_idf_hal::peripherals::Peripherals;
    use esp_idf_hal::units::FromValueType;
    use log::warn;

    use crate::pins;

    /// µs pause between step pulses (sets carrier speed, ~1000 steps/s).
    const STEP_INTERVAL_US: u32 = 1_000;
    /// HC-SR04 listen window; past this the surface is out of range.
    const ECHO_TIMEOUT_US: i64 = 30_000;

    type OutPin = PinDriver<'static, AnyOutputPin, Output>;

    pub struct HardwareAdapter {
        relays: [Relay<OutPin>; RelayChannel::COUNT],
        stepper: Stepper<OutPin, OutPin>,
        i2c: I2cDriver<'static>,
        trig: OutPin,
        echo: PinDriver<'static, AnyIOPin, Input>,
    }

    impl HardwareAdapter {
        /// Claim every peripheral the enclosure uses.  Pin assignments
        /// are documented in [`crate::pins`].
        pub fn new(p: Peripherals) -> anyhow::Result<Self> {
            let relays = [
                Relay::new(PinDriver::output(AnyOutputPin::from(p.pins.gpio2))?)?,
                Relay::new(PinDriver::output(AnyOutputPin::from(p.pins.gpio3))?)?,
                Relay::new(PinDriver::output(AnyOutputPin::from(p.pins.gpio4))?)?,
                Relay::new(PinDriver::output(AnyOutputPin::from(p.pins.gpio5))?)?,
            ];

            let stepper = Stepper::new(
                PinDriver::output(AnyOutputPin::from(p.pins.gpio9))?,
                PinDriver::output(AnyOutputPin::from(p.pins.gpio10))?,
            )?;

            let i2c = I2cDriver::new(
                p.i2c0,
                p.pins.gpio41,
                p.pins.gpio42,
                &I2cConfig::new().baudrate(100_u32.kHz().into()),
            )?;

            let trig = PinDriver::output(AnyOutputPin::from(p.pins.gpio6))?;
            let echo = PinDriver::input(AnyIOPin::from(p.pins.gpio7))?;

            unsafe {
                esp_idf_sys::adc1_config_width(esp_idf_sys::adc_bits_width_t_ADC_WIDTH_BIT_12);
                esp_idf_sys::adc1_config_channel_atten(
                    esp_idf_sys::adc1_channel_t_ADC1_CHANNEL_0, // pH, GPIO 1
                    esp_idf_sys::adc_atten_t_ADC_ATTEN_DB_11,
                );
                esp_idf_sys::adc1_config_channel_atten(
                    esp_idf_sys::adc1_channel_t_ADC1_CHANNEL_7, // LDR, GPIO 8
                    esp_idf_sys::adc_atten_t_ADC_ATTEN_DB_11,
                );
            }

            Ok(Self {
                relays,
                stepper,
                i2c,
                trig,
                echo,
            })
        }

        /// Single-shot SHT31 measurement, high repeatability with clock
        /// stretching (command 0x2C06).  Returns (°C, %RH); NaN pairs on
        /// any bus error.
        fn read_sht31(&mut self) -> (f32, f32) {
            let mut buf = [0u8; 6];
            let result = self
                .i2c
                .write(pins::SHT31_I2C_ADDR, &[0x2C, 0x06], BLOCK)
                .and_then(|()| {
                    Ets::delay_ms(20);
                    self.i2c.read(pins::SHT31_I2C_ADDR, &mut buf, BLOCK)
                });
            if let Err(e) = result {
                warn!("sht31 read failed: {e}");
                return (f32::NAN, f32::NAN);
            }
            let t_raw = u16::from_be_bytes([buf[0], buf[1]]);
            let rh_raw = u16::from_be_bytes([buf[3], buf[4]]);
            let t = -45.0 + 175.0 * f32::from(t_raw) / 65_535.0;
            let rh = 100.0 * f32::from(rh_raw) / 65_535.0;
            (t, rh)
        }

        /// Measure one echo pulse width on the HC-SR04 echo pin.
        /// Returns 0 on timeout, the convention the sensor layer maps to
        /// [`crate::error::SensorError::EchoTimeout`].
        fn pulse_in(&mut self) -> u32 {
            let deadline =
                unsafe { esp_idf_sys::esp_timer_get_time() } + ECHO_TIMEOUT_US;

            while self.echo.is_low() {
                if unsafe { esp_idf_sys::esp_timer_get_time() } > deadline {
                    return 0;
                }
            }
            let rise = unsafe { esp_idf_sys::esp_timer_get_time() };
            while self.echo.is_high() {
                if unsafe { esp_idf_sys::esp_timer_get_time() } > deadline {
                    return 0;
                }
            }
            let fall = unsafe { esp_idf_sys::esp_timer_get_time() };
            (fall - rise) as u32
        }
    }

    impl SensorPort for HardwareAdapter {
        fn read_temperature_c(&mut self) -> f32 {
            self.read_sht31().0
        }

        fn read_humidity_pct(&mut self) -> f32 {
            self.read_sht31().1
        }

        fn read_ph_raw(&mut self) -> u16 {
            let raw =
                unsafe { esp_idf_sys::adc1_get_raw(esp_idf_sys::adc1_channel_t_ADC1_CHANNEL_0) };
            raw.max(0) as u16
        }

        fn read_echo_us(&mut self) -> u32 {
            // 10 µs trigger pulse starts a measurement.
            if self.trig.set_high().is_err() {
                return 0;
            }
            Ets::delay_us(10);
            if self.trig.set_low().is_err() {
                return 0;
            }
            self.pulse_in()
        }

        fn read_light_raw(&mut self) -> u16 {
            let raw =
                unsafe { esp_idf_sys::adc1_get_raw(esp_idf_sys::adc1_channel_t_ADC1_CHANNEL_7) };
            raw.max(0) as u16
        }
    }

    impl ActuatorPort for HardwareAdapter {
        fn set_relay(&mut self, channel: RelayChannel, on: bool) {
            if let Err(e) = self.relays[channel.index()].set(on) {
                warn!("relay {channel:?} write failed: {e}");
            }
        }

        fn start_move(&mut self, delta_steps: u32) {
            self.stepper.move_relative(delta_steps);
        }

        fn poll_move(&mut self) -> u32 {
            match self.stepper.run() {
                Ok(remaining) => {
                    if remaining > 0 {
                        Ets::delay_us(STEP_INTERVAL_US);
                    }
                    remaining
                }
                Err(e) => {
                    warn!("step pin write failed: {e}");
                    0
                }
            }
        }
    }
}

#[cfg(target_os = "espidf")]
pub use board::HardwareAdapter;
