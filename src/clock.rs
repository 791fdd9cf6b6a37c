//! The free-running time source read by the main loop, and the pause helper shared by the loop
//! and the animator.

use embassy_time::{Duration, Instant};
use embedded_hal_async::delay::DelayNs;

/// Reads the current time. The main loop samples it once per iteration.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The embassy time driver's uptime counter.
#[cfg(not(feature = "host"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(not(feature = "host"))]
impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Waits for `duration`, saturating at `u32::MAX` milliseconds.
pub async fn pause<D: DelayNs>(delay: &mut D, duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    delay.delay_ms(millis).await;
}
