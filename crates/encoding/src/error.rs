//! crates/encoding/src/error.rs
//!
//! Errors raised while decoding or re-encoding user input.

use stepper::StepperError;
use thiserror::Error;

use crate::base::InputBase;

/// Errors reported by [`decode`](crate::decode), [`encode`](crate::encode)
/// and [`convert`](crate::convert).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EncodingError {
    /// The input contains a character outside its declared base.
    #[error("invalid {base} digit {character:?} at position {position}")]
    InvalidDigit {
        /// Declared base of the input.
        base: InputBase,
        /// Offending character.
        character: char,
        /// Character index (not byte offset) of the offending character.
        position: usize,
    },
    /// The bit length cannot be expressed in the target base.
    #[error("{bits} bits cannot be written as {base}; the length must be a multiple of {}", base.alignment_bits())]
    Misaligned {
        /// Bit length of the value.
        bits: u64,
        /// Requested target base.
        base: InputBase,
    },
    /// The bytes do not form valid UTF-8 text.
    #[error("bytes are not valid UTF-8 text")]
    InvalidUtf8,
    /// The decoded message is too long to be hashed.
    #[error(transparent)]
    Length(#[from] StepperError),
}
