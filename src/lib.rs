//! Digit sweeps on a 5×5 WS2812 matrix, a blinking RGB LED, and two buttons, for the Raspberry Pi
//! Pico.
//!
//! Everything except [`board`] and [`ws2812`] is generic over `embedded-hal` traits and builds on
//! the host with `--no-default-features --features host`.
#![no_std]

pub mod animator;
pub mod blink;
pub mod button;
pub mod clock;
pub mod constants;
pub mod controller;
mod error;
pub mod glyph;
mod never;
pub mod pixel;

#[cfg(all(feature = "pico1", not(feature = "host")))]
pub mod board;
#[cfg(all(feature = "pico1", not(feature = "host")))]
pub mod ws2812;

// Re-export commonly used items
pub use animator::{Animator, Direction};
pub use blink::{BlinkState, RgbLed};
pub use button::{Button, Buttons};
pub use controller::{Controller, Mode};
pub use error::{Error, Result};
pub use glyph::{Digit, Glyph, glyph};
pub use never::Never;
pub use pixel::{PixelSink, PixelWord, Rgb, encode};
