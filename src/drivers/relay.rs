//! Active-low relay channel driver.
//!
//! The relay boards on the reference hardware energise on a LOW input, so
//! the driver inverts: `set(true)` pulls the pin low.  Construction
//! drives the pin high immediately — a floating input at boot would click
//! every pump on.

use embedded_hal::digital::OutputPin;

pub struct Relay<P: OutputPin> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Relay<P> {
    /// Wrap a pin and force the relay into the released state.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_high()?;
        Ok(Self { pin, on: false })
    }

    /// Energise (`true`) or release (`false`) the relay.
    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on {
            self.pin.set_low()?;
        } else {
            self.pin.set_high()?;
        }
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
