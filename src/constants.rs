//! Compile-time configuration for the board: pin assignments, matrix geometry, colors, and timing.

use embassy_time::Duration;
use smart_leds::RGB8;

// Pin assignments. `board` binds the matching `embassy_rp` peripherals.

/// Data line of the WS2812 matrix.
pub const WS2812_PIN: u8 = 7;
/// Button A (ascending sweep). Active low with the internal pull-up.
pub const BUTTON_A_PIN: u8 = 5;
/// Button B (descending sweep). Active low with the internal pull-up.
pub const BUTTON_B_PIN: u8 = 6;
pub const LED_RED_PIN: u8 = 11;
pub const LED_GREEN_PIN: u8 = 12;
pub const LED_BLUE_PIN: u8 = 13;

/// Width and height of the square LED matrix.
pub const GRID_SIZE: usize = 5;
/// Pixels in the strip, wired in row-major order.
pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Digits 0 through 9.
pub const DIGIT_COUNT: usize = 10;

/// WS2812 bit rate.
pub const WS2812_FREQ_KHZ: u32 = 800;

/// Color of every lit matrix cell.
pub const MIDNIGHT_PURPLE: RGB8 = RGB8 {
    r: 74,
    g: 5,
    b: 176,
};

/// Channel intensities of the discrete RGB LED while lit. Each channel is a plain on/off line, so
/// any non-zero component means "high".
pub const BLINK_COLOR: RGB8 = MIDNIGHT_PURPLE;

/// Half-period of the RGB LED blink.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// How long each digit stays up during a sweep.
pub const DIGIT_PAUSE: Duration = Duration::from_millis(750);
/// Sleep at the end of every main-loop iteration.
pub const LOOP_PAUSE: Duration = Duration::from_millis(10);
