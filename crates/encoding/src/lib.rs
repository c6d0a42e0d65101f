#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `encoding` turns the message a user types into the bit sequence the
//! [`stepper`] engine hashes, and renders bit sequences back into any of the
//! supported [`InputBase`]s.
//!
//! # Design
//!
//! A message is always a plain [`BitString`](stepper::BitString); the base is
//! only a presentation of it. Text contributes its UTF-8 bytes, binary one bit
//! per digit and hex four bits per digit, so binary and hex messages need not
//! be byte aligned.
//!
//! # Examples
//!
//! ```
//! use encoding::{InputBase, convert, decode};
//!
//! let bits = decode("abc", InputBase::Text).unwrap();
//! assert_eq!(bits.len(), 24);
//! assert_eq!(convert("abc", InputBase::Text, InputBase::Hex).unwrap(), "616263");
//! ```

mod base;
mod codec;
mod error;

pub use base::{InputBase, InputBaseParseError};
pub use codec::{convert, decode, encode};
pub use error::EncodingError;
