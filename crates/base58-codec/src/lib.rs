//! Base58 encoding and decoding with the Bitcoin alphabet.
//!
//! Arbitrary byte strings are treated as big-endian numbers and
//! converted to base 58. Each leading zero byte is written as
//! a leading `'1'`, so the conversion is exact in both
//! directions.
//!
//! ```
//! use base58_codec::{decode, encode};
//!
//! assert_eq!(encode(&[0, 0, 1]), "112");
//! assert_eq!(decode("112").unwrap(), [0, 0, 1]);
//! ```
//!
//! Checksums, version bytes and length limits are left to the
//! caller.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod alphabet;
mod arith;
mod base58;
mod error;

pub use crate::{
    alphabet::ALPHABET,
    base58::{ToBase58, decode, encode, max_encoded_len},
    error::DecodeError,
};
