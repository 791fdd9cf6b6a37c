//! Pixel colors in WS2812 wire order, and the contract for pushing them to a strip.

use smart_leds::RGB8;

use crate::Result;

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// One pixel packed for transmission: green in bits 16..24, red in 8..16, blue in 0..8.
///
/// The top byte is always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, defmt::Format)]
pub struct PixelWord(u32);

impl PixelWord {
    /// All channels off.
    pub const OFF: Self = Self(0);

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Unpacks the channels in the same order [`encode`] packs them.
    #[must_use]
    pub const fn decode(self) -> Rgb {
        let [_, g, r, b] = self.0.to_be_bytes();
        Rgb { r, g, b }
    }

    /// The word as the PIO TX FIFO wants it: the 24 color bits left-aligned, since the state
    /// machine shifts out MSB first and stops after 24 bits.
    #[must_use]
    pub const fn fifo_word(self) -> u32 {
        let [_, g, r, b] = self.0.to_be_bytes();
        u32::from_be_bytes([g, r, b, 0])
    }
}

impl From<Rgb> for PixelWord {
    fn from(color: Rgb) -> Self {
        encode(color)
    }
}

/// Packs `color` into GRB wire order.
#[must_use]
pub const fn encode(color: Rgb) -> PixelWord {
    PixelWord(u32::from_be_bytes([0, color.g, color.r, color.b]))
}

/// The "send one pixel" primitive of an addressable LED strip.
///
/// Each call feeds the next pixel in strip order. Implementations must wait until the word is
/// queued for transmission.
#[allow(async_fn_in_trait, reason = "Single-threaded executor; futures need not be Send")]
pub trait PixelSink {
    async fn send(&mut self, word: PixelWord) -> Result<()>;
}
