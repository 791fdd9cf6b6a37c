//! The auxiliary RGB LED and its blink timer.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::OutputPin;

use crate::constants::{BLINK_COLOR, BLINK_INTERVAL};
use crate::{Error, Result};

/// Whether the RGB LED is lit, and when it last toggled.
///
/// The main loop owns this value: it passes it to [`BlinkState::poll`] each iteration and keeps
/// the returned one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkState {
    lit: bool,
    last_toggle: Instant,
}

impl Default for BlinkState {
    fn default() -> Self {
        Self::new()
    }
}

impl BlinkState {
    /// Off, with the last toggle at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lit: false,
            last_toggle: Instant::from_ticks(0),
        }
    }

    #[must_use]
    pub const fn is_lit(self) -> bool {
        self.lit
    }

    #[must_use]
    pub const fn last_toggle(self) -> Instant {
        self.last_toggle
    }

    /// Toggles once [`BLINK_INTERVAL`] has passed since the last toggle.
    ///
    /// Returns the next state and, when it toggled, the new level to drive. Elapsed time is
    /// measured from the moment of the previous toggle, so late polls push the next window back.
    #[must_use]
    pub fn poll(self, now: Instant) -> (Self, Option<bool>) {
        let elapsed = now
            .checked_duration_since(self.last_toggle)
            .unwrap_or(Duration::from_ticks(0));
        if elapsed < BLINK_INTERVAL {
            return (self, None);
        }
        let lit = !self.lit;
        (
            Self {
                lit,
                last_toggle: now,
            },
            Some(lit),
        )
    }
}

/// The discrete RGB LED: one on/off output per channel.
pub struct RgbLed<O> {
    red: O,
    green: O,
    blue: O,
}

impl<O: OutputPin> RgbLed<O> {
    /// The pins should start low (LED off).
    #[must_use]
    pub const fn new(red: O, green: O, blue: O) -> Self {
        Self { red, green, blue }
    }

    /// Lit drives each channel of [`BLINK_COLOR`] that is non-zero high; unlit drives all low.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if any pin rejects the level.
    pub fn set_lit(&mut self, lit: bool) -> Result<()> {
        let levels = [
            (&mut self.red, BLINK_COLOR.r),
            (&mut self.green, BLINK_COLOR.g),
            (&mut self.blue, BLINK_COLOR.b),
        ];
        for (pin, intensity) in levels {
            pin.set_state((lit && intensity != 0).into())
                .map_err(|_| Error::CannotSetOutputState)?;
        }
        Ok(())
    }
}
