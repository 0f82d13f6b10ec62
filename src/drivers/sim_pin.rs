//! An infallible in-memory GPIO pin for host builds and driver tests.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// Records the last level written; nothing else.
#[derive(Debug, Default)]
pub struct SimPin {
    high: bool,
}

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}
