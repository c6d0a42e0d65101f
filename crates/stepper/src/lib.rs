#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `stepper` computes SHA-256 one observable step at a time. A message and a
//! single integer clock position fully determine the intermediate state:
//! padded bits, the partly expanded message schedule, the working registers
//! and the chained hash state.
//!
//! # Design
//!
//! Each 512-bit block runs through a fixed cycle of [`CYCLE_LENGTH`] sub-steps
//! described by [`PHASE_TABLE`]. [`evaluate`] maps a clock onto
//! `(block, phase, sub-step)` through [`Timeline`] and re-derives the state
//! from scratch, so stepping backwards or seeking never accumulates drift.
//! [`Stepper`] wraps the same function with a clamped, mutable clock for
//! interactive drivers.
//!
//! # Examples
//!
//! ```
//! use stepper::{BitString, Stepper};
//!
//! let message = BitString::from_bytes(b"abc").unwrap();
//! let mut stepper = Stepper::new(&message).unwrap();
//! stepper.run_to_completion();
//! let snapshot = stepper.snapshot().unwrap();
//! assert_eq!(
//!     snapshot.digest.as_deref(),
//!     Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
//! );
//! ```

mod bits;
pub mod clock;
pub mod compression;
pub mod constants;
mod digest;
mod error;
pub mod padding;
pub mod schedule;
mod snapshot;
mod stepper;

pub use bits::BitString;
pub use clock::{CYCLE_LENGTH, Cursor, PHASE_TABLE, Phase, Timeline, last_valid_clock};
pub use compression::{CompressionOutcome, RoundTerms, WorkingRegisters, compress_rounds};
pub use constants::{INITIAL_HASH, ROUND_CONSTANTS, RoundConstants};
pub use digest::HashState;
pub use error::StepperError;
pub use padding::{Block, PaddedMessage, PaddingLayout, pad};
pub use schedule::{MessageSchedule, WordDerivation};
pub use snapshot::{StepSnapshot, evaluate, evaluate_padded};
pub use stepper::{Frames, Stepper};
