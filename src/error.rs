use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// GPIO on the RP2040 is infallible, but the `embedded-hal` traits let a pin report failure, so
/// the generic code maps any pin error into one of these.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A digital output refused a level change.
    #[display("Error setting output state")]
    CannotSetOutputState,

    /// A digital input could not be read.
    #[display("Error reading input state")]
    CannotReadInput,
}
