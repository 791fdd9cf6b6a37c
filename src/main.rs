//! Shows digits 0-9 on a 5×5 WS2812 matrix while a discrete RGB LED blinks.
//!
//! Hold button A for an ascending sweep, button B for a descending one. Runs on a Raspberry Pi
//! Pico RP2040.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use defmt::info;
use defmt_rtt as _;
use digit_matrix::clock::SystemClock;
use digit_matrix::{Never, Result, board};
use embassy_executor::Spawner;
use embassy_time::Delay;
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner0: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner0).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Never> {
    let p = embassy_rp::init(Default::default());
    let mut controller = board::init(p);

    controller.reset().await?;
    info!("digit-matrix ready");

    controller.run(&SystemClock, &mut Delay).await
}
