//! Digit sweeps on the LED matrix.
//!
//! See [`Animator`] for the main entry point.

use embedded_hal_async::delay::DelayNs;

use crate::Result;
use crate::clock::pause;
use crate::constants::{DIGIT_PAUSE, MIDNIGHT_PURPLE, PIXEL_COUNT};
use crate::glyph::{self, Digit};
use crate::pixel::{PixelSink, PixelWord, encode};

#[cfg(not(feature = "host"))]
use defmt::info;

/// Which way a sweep walks through the digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Direction {
    /// Step +1.
    Up,
    /// Step -1.
    Down,
}

impl Direction {
    /// Digits from `start` to `end` inclusive, stepping in this direction.
    ///
    /// Yields nothing when `end` lies behind `start` for this direction.
    pub fn digits(self, start: Digit, end: Digit) -> impl Iterator<Item = Digit> {
        let mut values = match self {
            Self::Up => start.get()..=end.get(),
            Self::Down => end.get()..=start.get(),
        };
        core::iter::from_fn(move || match self {
            Self::Up => values.next(),
            Self::Down => values.next_back(),
        })
        .filter_map(Digit::new)
    }
}

/// Pushes digit glyphs to a 25-pixel matrix through a [`PixelSink`].
///
/// A sweep holds the caller for its whole length (about 7.5 s for all ten digits). Nothing else
/// on the executor runs in the meantime, so the main loop stops reading buttons and stops
/// blinking until it returns.
pub struct Animator<S> {
    sink: S,
}

impl<S: PixelSink> Animator<S> {
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Shows each digit from `start` to `end` inclusive, holding each one for [`DIGIT_PAUSE`].
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the pixel sink.
    pub async fn animate<D: DelayNs>(
        &mut self,
        start: Digit,
        end: Digit,
        direction: Direction,
        delay: &mut D,
    ) -> Result<()> {
        #[cfg(not(feature = "host"))]
        info!("Sweep {} -> {} ({})", start, end, direction);

        for digit in direction.digits(start, end) {
            self.show(digit).await?;
            pause(delay, DIGIT_PAUSE).await;
        }

        #[cfg(not(feature = "host"))]
        info!("Sweep done");
        Ok(())
    }

    /// Writes one digit's glyph: lit cells in [`MIDNIGHT_PURPLE`], the rest off.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the pixel sink.
    pub async fn show(&mut self, digit: Digit) -> Result<()> {
        let lit = encode(MIDNIGHT_PURPLE);
        for cell in glyph::cells(glyph::glyph(digit)) {
            self.sink.send(if cell { lit } else { PixelWord::OFF }).await?;
        }
        Ok(())
    }

    /// Turns every pixel off.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the pixel sink.
    pub async fn all_off(&mut self) -> Result<()> {
        for _ in 0..PIXEL_COUNT {
            self.sink.send(PixelWord::OFF).await?;
        }
        Ok(())
    }
}
