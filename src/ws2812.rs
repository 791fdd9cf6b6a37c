//! WS2812 pixel output on an RP2040 PIO state machine, fed one pixel at a time by the CPU.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use fixed::types::U24F8;

use crate::Result;
use crate::constants::WS2812_FREQ_KHZ;
use crate::pixel::{PixelSink, PixelWord};

// Cycles per phase of one WS2812 bit.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
// GRB only; the matrix has no white channel.
const BITS_PER_PIXEL: u8 = 24;

fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

/// A [`PixelSink`] that pushes each word into the TX FIFO of one state machine.
///
/// `send` waits only for FIFO space, not for the bits to leave the pin. The strip latches on its
/// own once the line idles low, which the pauses between frames guarantee.
pub struct Ws2812Sink<'d, P: Instance, const S: usize> {
    // Holds the PIO instruction memory the program lives in.
    _common: Common<'d, P>,
    sm: StateMachine<'d, P, S>,
}

impl<'d, P: Instance, const S: usize> Ws2812Sink<'d, P, S> {
    /// Loads the program and starts the state machine at [`WS2812_FREQ_KHZ`].
    pub fn new(
        mut common: Common<'d, P>,
        mut sm: StateMachine<'d, P, S>,
        pin: embassy_rp::Peri<'d, impl PioPin>,
    ) -> Self {
        let program = load_ws2812_program(&mut common);
        let mut cfg = Config::default();

        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(WS2812_FREQ_KHZ);
        let bit_freq = ws2812_freq * u32::from(T1 + T2 + T3);
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);

        Self {
            _common: common,
            sm,
        }
    }
}

impl<P: Instance, const S: usize> PixelSink for Ws2812Sink<'_, P, S> {
    async fn send(&mut self, word: PixelWord) -> Result<()> {
        self.sm.tx().wait_push(word.fifo_word()).await;
        Ok(())
    }
}
