//! Board bring-up for the Raspberry Pi Pico: binds the pins named in [`crate::constants`].

use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};

use crate::animator::Animator;
use crate::blink::RgbLed;
use crate::button::Buttons;
use crate::controller::Controller;
use crate::ws2812::Ws2812Sink;

bind_interrupts!(pub struct Pio0Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// The controller wired to this board's hardware.
pub type BoardController = Controller<Ws2812Sink<'static, PIO0, 0>, Input<'static>, Output<'static>>;

/// Claims the peripherals and returns the controller with every output low.
///
/// Keep in sync with the pin numbers in [`crate::constants`].
#[must_use]
pub fn init(p: embassy_rp::Peripherals) -> BoardController {
    let Pio { common, sm0, .. } = Pio::new(p.PIO0, Pio0Irqs);
    let sink = Ws2812Sink::new(common, sm0, p.PIN_7);

    let buttons = Buttons::active_low(Input::new(p.PIN_5, Pull::Up), Input::new(p.PIN_6, Pull::Up));

    let rgb_led = RgbLed::new(
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    );

    Controller::new(Animator::new(sink), buttons, rgb_led)
}
