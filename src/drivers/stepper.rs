//! Step/dir stepper driver for the carrier mechanism.
//!
//! The carrier only ever turns one way, so the direction pin is driven
//! once at construction and left alone.  [`Stepper::run`] issues exactly
//! one step pulse per call; the caller owns the step pacing (the rotation
//! controller polls it to completion, which on the A4988 board steps as
//! fast as the pulse train allows).

use embedded_hal::digital::OutputPin;

pub struct Stepper<S: OutputPin, D: OutputPin> {
    step: S,
    #[allow(dead_code)]
    dir: D,
    /// Steps remaining in the current move.
    remaining: u32,
    /// Total steps issued since construction.
    position: u32,
}

impl<S: OutputPin, D: OutputPin> Stepper<S, D> {
    /// Wrap the step/dir pins; the direction pin latches forward.
    pub fn new(step: S, mut dir: D) -> Result<Self, D::Error> {
        dir.set_high()?;
        Ok(Self {
            step,
            dir,
            remaining: 0,
            position: 0,
        })
    }

    /// Queue `steps` additional forward steps.
    pub fn move_relative(&mut self, steps: u32) {
        self.remaining += steps;
    }

    /// Issue one step pulse if work is pending.  Returns steps remaining.
    pub fn run(&mut self) -> Result<u32, S::Error> {
        if self.remaining > 0 {
            self.step.set_high()?;
            self.step.set_low()?;
            self.remaining -= 1;
            self.position = self.position.wrapping_add(1);
        }
        Ok(self.remaining)
    }

    pub fn distance_to_go(&self) -> u32 {
        self.remaining
    }

    pub fn position(&self) -> u32 {
        self.position
    }
}
