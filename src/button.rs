//! Push buttons read by polling.

use embedded_hal::digital::InputPin;

use crate::{Error, Result};

/// A single button wired to ground with a pull-up, so it reads low while held.
///
/// Reads the pin level on demand; no debouncing, no edge tracking.
pub struct Button<I> {
    pin: I,
}

impl<I: InputPin> Button<I> {
    #[must_use]
    pub const fn new(pin: I) -> Self {
        Self { pin }
    }

    /// Whether the button is held right now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotReadInput`] if the pin cannot be read.
    pub fn is_pressed(&mut self) -> Result<bool> {
        self.pin.is_low().map_err(|_| Error::CannotReadInput)
    }
}

/// Button A (ascending) and button B (descending).
pub struct Buttons<I> {
    pub a: Button<I>,
    pub b: Button<I>,
}

impl<I: InputPin> Buttons<I> {
    /// Both buttons wired to ground with pull-ups.
    #[must_use]
    pub const fn active_low(a: I, b: I) -> Self {
        Self {
            a: Button::new(a),
            b: Button::new(b),
        }
    }
}
