//! The main loop: one thread, three behaviors, no preemption.
//!
//! Each iteration runs the blink check, then exactly one of the ascending sweep, the descending
//! sweep, or the idle blanking pass, then sleeps for [`LOOP_PAUSE`]. A sweep is awaited inline, so
//! while it runs nothing else is serviced. The blink timer is starved for the whole sweep and
//! catches up with a single toggle on the next iteration.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::animator::{Animator, Direction};
use crate::blink::{BlinkState, RgbLed};
use crate::button::Buttons;
use crate::clock::{Clock, pause};
use crate::constants::LOOP_PAUSE;
use crate::glyph::Digit;
use crate::pixel::PixelSink;
use crate::{Never, Result};

#[cfg(not(feature = "host"))]
use defmt::{debug, info};

/// What the matrix does during one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Mode {
    /// Button A: sweep 0 through 9.
    Ascending,
    /// Button B: sweep 9 through 0.
    Descending,
    /// Neither button: blank the matrix.
    Idle,
}

impl Mode {
    /// Button A wins when both are held.
    #[must_use]
    pub const fn select(a_pressed: bool, b_pressed: bool) -> Self {
        if a_pressed {
            Self::Ascending
        } else if b_pressed {
            Self::Descending
        } else {
            Self::Idle
        }
    }
}

/// Owns every output and input the loop touches.
pub struct Controller<S, I, O> {
    animator: Animator<S>,
    buttons: Buttons<I>,
    rgb_led: RgbLed<O>,
    last_mode: Option<Mode>,
}

impl<S, I, O> Controller<S, I, O>
where
    S: PixelSink,
    I: InputPin,
    O: OutputPin,
{
    #[must_use]
    pub const fn new(animator: Animator<S>, buttons: Buttons<I>, rgb_led: RgbLed<O>) -> Self {
        Self {
            animator,
            buttons,
            rgb_led,
            last_mode: None,
        }
    }

    /// Blanks the matrix and turns the RGB LED off.
    ///
    /// # Errors
    ///
    /// Returns an error if a pixel or pin write fails.
    pub async fn reset(&mut self) -> Result<()> {
        self.rgb_led.set_lit(false)?;
        self.animator.all_off().await
    }

    /// Runs forever, starting from [`BlinkState::new`].
    ///
    /// # Errors
    ///
    /// Only returns if a pixel, pin, or button operation fails.
    pub async fn run<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) -> Result<Never> {
        let mut blink = BlinkState::new();
        loop {
            (blink, _) = self.step(blink, clock, delay).await?;
        }
    }

    /// One loop iteration. Returns the updated blink state and the mode that ran.
    ///
    /// # Errors
    ///
    /// Returns an error if a pixel, pin, or button operation fails.
    pub async fn step<C: Clock, D: DelayNs>(
        &mut self,
        blink: BlinkState,
        clock: &C,
        delay: &mut D,
    ) -> Result<(BlinkState, Mode)> {
        let (blink, toggled) = blink.poll(clock.now());
        if let Some(lit) = toggled {
            #[cfg(not(feature = "host"))]
            debug!("RGB LED {}", if lit { "on" } else { "off" });
            self.rgb_led.set_lit(lit)?;
        }

        // B is read only while A is released.
        let a_pressed = self.buttons.a.is_pressed()?;
        let b_pressed = !a_pressed && self.buttons.b.is_pressed()?;
        let mode = Mode::select(a_pressed, b_pressed);
        self.note_mode(mode);

        match mode {
            Mode::Ascending => {
                self.animator
                    .animate(Digit::MIN, Digit::MAX, Direction::Up, delay)
                    .await?;
            }
            Mode::Descending => {
                self.animator
                    .animate(Digit::MAX, Digit::MIN, Direction::Down, delay)
                    .await?;
            }
            Mode::Idle => self.animator.all_off().await?,
        }

        pause(delay, LOOP_PAUSE).await;
        Ok((blink, mode))
    }

    fn note_mode(&mut self, mode: Mode) {
        if self.last_mode != Some(mode) {
            #[cfg(not(feature = "host"))]
            info!("Mode: {}", mode);
            self.last_mode = Some(mode);
        }
    }
}
