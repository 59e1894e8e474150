use alloc::{string::String, vec::Vec};

use crate::{
    alphabet::{digit, symbol},
    arith::{divmod58, divmod256, skip_zeros},
    error::DecodeError,
};

/// Implemented by types that can encode themselves as Base58.
pub trait ToBase58 {
    /// Encodes itself as a Base58 string.
    fn to_base58(&self) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> ToBase58 for T {
    #[inline]
    fn to_base58(&self) -> String {
        encode(self.as_ref())
    }
}

/// Returns an upper bound on the length of the Base58 encoding
/// of `n` bytes.
///
/// Each byte needs at most log(256)/log(58) ~ 1.3658 symbols.
/// A leading zero byte needs exactly one.
pub const fn max_encoded_len(n: usize) -> usize {
    n.saturating_mul(138).saturating_div(100).saturating_add(1)
}

/// Encodes `input` as a Base58 string.
///
/// Each leading zero byte becomes a leading `'1'`. The empty
/// input encodes to the empty string.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Scratch copy of the magnitude; the caller's bytes are
    // never modified.
    let mut number = input.to_vec();

    // Base 58 digits, least significant first.
    let mut digits = Vec::with_capacity(max_encoded_len(input.len()));
    let mut start = zeros;
    while start < number.len() {
        digits.push(divmod58(&mut number, start));
        start = skip_zeros(&number, start);
    }

    // `skip_zeros` stops the loop once the quotient is zero, so
    // the most significant digit is never a padding zero. The
    // leading zeros are added back below, one per zero byte.
    debug_assert_ne!(digits.last(), Some(&0));

    let mut s = String::with_capacity(zeros.saturating_add(digits.len()));
    s.extend(core::iter::repeat_n(symbol(0), zeros));
    s.extend(digits.iter().rev().map(|&d| symbol(d)));
    s
}

/// Decodes the Base58 string `input`.
///
/// Each leading `'1'` becomes a leading zero byte, followed by
/// the minimal big-endian encoding of the rest of the number.
///
/// It fails on the first character that is not in
/// [`ALPHABET`][crate::ALPHABET] without returning any partial
/// output.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut number = input
        .char_indices()
        .map(|(index, character)| {
            digit(character).ok_or(DecodeError::InvalidCharacter { character, index })
        })
        .collect::<Result<Vec<u8>, _>>()
        .inspect_err(|err| {
            tracing::debug!(
                index = err.index(),
                character = ?err.character(),
                "rejected base58 input"
            );
        })?;
    let zeros = number.iter().take_while(|&&d| d == 0).count();

    // Bytes, least significant first.
    let mut bytes = Vec::with_capacity(number.len());
    let mut start = zeros;
    while start < number.len() {
        bytes.push(divmod256(&mut number, start));
        start = skip_zeros(&number, start);
    }

    debug_assert_ne!(bytes.last(), Some(&0));
    bytes.resize(bytes.len().saturating_add(zeros), 0);
    bytes.reverse();
    Ok(bytes)
}
