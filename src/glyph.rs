//! 5×5 digit glyphs for the LED matrix.
//!
//! See [`glyph`] for lookups and [`Digit`] for the only values it accepts.

use core::fmt;

use crate::constants::{DIGIT_COUNT, GRID_SIZE};

/// Lit (`true`) and unlit (`false`) cells of one digit, indexed `[row][col]`.
pub type Glyph = [[bool; GRID_SIZE]; GRID_SIZE];

const X: bool = true;
const O: bool = false;

#[rustfmt::skip]
static GLYPHS: [Glyph; DIGIT_COUNT] = [
    // 0
    [
        [O, X, X, X, O],
        [X, O, O, O, X],
        [X, O, O, O, X],
        [X, O, O, O, X],
        [O, X, X, X, O],
    ],
    // 1
    [
        [X, X, X, X, X],
        [O, O, X, O, O],
        [O, O, X, O, X],
        [O, X, X, O, O],
        [O, O, X, O, O],
    ],
    // 2
    [
        [X, X, X, X, X],
        [X, O, O, O, O],
        [X, X, X, X, X],
        [O, O, O, O, X],
        [X, X, X, X, X],
    ],
    // 3
    [
        [X, X, X, X, X],
        [O, O, O, O, X],
        [X, X, X, X, X],
        [O, O, O, O, X],
        [X, X, X, X, X],
    ],
    // 4
    [
        [X, O, O, O, O],
        [O, O, O, O, X],
        [X, X, X, X, X],
        [X, O, O, O, X],
        [X, O, O, O, X],
    ],
    // 5
    [
        [X, X, X, X, X],
        [O, O, O, O, X],
        [X, X, X, X, X],
        [X, O, O, O, O],
        [X, X, X, X, X],
    ],
    // 6
    [
        [X, X, X, X, X],
        [X, O, O, O, X],
        [X, X, X, X, X],
        [X, O, O, O, O],
        [X, X, X, X, X],
    ],
    // 7
    [
        [X, O, O, O, O],
        [O, O, O, O, X],
        [X, O, O, O, O],
        [O, O, O, O, X],
        [X, X, X, X, X],
    ],
    // 8
    [
        [X, X, X, X, X],
        [X, O, O, O, X],
        [X, X, X, X, X],
        [X, O, O, O, X],
        [X, X, X, X, X],
    ],
    // 9
    [
        [X, X, X, X, X],
        [O, O, O, O, X],
        [X, X, X, X, X],
        [X, O, O, O, X],
        [X, X, X, X, X],
    ],
];

/// A decimal digit, 0 through 9.
///
/// Constructing one is the range check, so [`glyph`] never sees an out-of-range value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, defmt::Format)]
pub struct Digit(u8);

impl Digit {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(9);

    /// Returns `None` when `value` is 10 or more.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 5×5 pattern for `digit`.
#[must_use]
pub fn glyph(digit: Digit) -> &'static Glyph {
    // `Digit` is always below `DIGIT_COUNT`; the fallback is never taken.
    GLYPHS.get(usize::from(digit.0)).unwrap_or(&BLANK)
}

static BLANK: Glyph = [[false; GRID_SIZE]; GRID_SIZE];

/// Number of lit cells in a glyph.
#[must_use]
pub fn lit_count(glyph: &Glyph) -> usize {
    glyph.iter().flatten().filter(|&&lit| lit).count()
}

/// Cells in strip order (row-major), as the matrix is wired.
pub fn cells(glyph: &Glyph) -> impl Iterator<Item = bool> + '_ {
    glyph.iter().flatten().copied()
}
