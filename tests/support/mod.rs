//! Host fakes for the `embedded-hal` traits and the pixel sink, sharing one simulated timeline.
#![allow(dead_code, reason = "Each test binary uses a different subset")]

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use digit_matrix::clock::Clock;
use digit_matrix::{Error, PixelSink, PixelWord, Result};
use embassy_time::{Duration, Instant};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

/// Something observable the firmware did, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Pixel(PixelWord),
    Pause(Duration),
}

/// Simulated microsecond counter plus the event log.
#[derive(Clone, Default)]
pub struct Sim {
    micros: Rc<Cell<u64>>,
    log: Rc<RefCell<Vec<Event>>>,
}

impl Sim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_millis(&self, millis: u64) {
        self.micros.set(millis * 1_000);
    }

    pub fn advance(&self, duration: Duration) {
        self.micros.set(self.micros.get() + duration.as_micros());
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.micros.get())
    }

    pub fn take_log(&self) -> Vec<Event> {
        self.log.take()
    }

    pub fn pixels(&self) -> Vec<PixelWord> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Pixel(word) => Some(*word),
                Event::Pause(_) => None,
            })
            .collect()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Pause(duration) => Some(*duration),
                Event::Pixel(_) => None,
            })
            .collect()
    }

    pub fn sink(&self) -> SimSink {
        SimSink { sim: self.clone() }
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay { sim: self.clone() }
    }

    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl Clock for Sim {
    fn now(&self) -> Instant {
        Instant::from_micros(self.micros.get())
    }
}

/// Logs every pixel word; sending takes no simulated time.
pub struct SimSink {
    sim: Sim,
}

impl PixelSink for SimSink {
    async fn send(&mut self, word: PixelWord) -> Result<()> {
        self.sim.push(Event::Pixel(word));
        Ok(())
    }
}

/// Logs each pause and advances the simulated clock by it.
pub struct SimDelay {
    sim: Sim,
}

impl SimDelay {
    fn pause(&self, duration: Duration) {
        self.sim.push(Event::Pause(duration));
        self.sim.advance(duration);
    }
}

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.pause(Duration::from_nanos(u64::from(ns)));
    }

    async fn delay_us(&mut self, us: u32) {
        self.pause(Duration::from_micros(u64::from(us)));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.pause(Duration::from_millis(u64::from(ms)));
    }
}

/// A pin whose level is shared with the test: inputs read it, outputs write it.
#[derive(Clone, Default)]
pub struct SimPin {
    high: Rc<Cell<bool>>,
}

impl SimPin {
    pub fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
        }
    }

    pub fn is_set_high(&self) -> bool {
        self.high.get()
    }

    pub fn drive(&self, high: bool) {
        self.high.set(high);
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

/// Logs the first `healthy` words like [`SimSink`], then rejects every send.
pub struct FailingSink {
    sim: Sim,
    healthy: usize,
}

impl Sim {
    pub fn failing_sink(&self, healthy: usize) -> FailingSink {
        FailingSink {
            sim: self.clone(),
            healthy,
        }
    }
}

impl PixelSink for FailingSink {
    async fn send(&mut self, word: PixelWord) -> Result<()> {
        if self.healthy == 0 {
            return Err(Error::CannotSetOutputState);
        }
        self.healthy -= 1;
        self.sim.push(Event::Pixel(word));
        Ok(())
    }
}

/// The error a [`FailingPin`] reports.
#[derive(Clone, Copy, Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A pin whose every read and write fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingPin;

impl ErrorType for FailingPin {
    type Error = PinFault;
}

impl InputPin for FailingPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Err(PinFault)
    }
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Err(PinFault)
    }
}
