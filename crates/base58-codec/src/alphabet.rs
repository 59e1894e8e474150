/// The Bitcoin Base58 alphabet.
///
/// A symbol's position is its digit value. `0`, `O`, `I` and
/// `l` are left out because they are easily confused.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const SYMBOLS: &[u8] = ALPHABET.as_bytes();
const _: () = assert!(SYMBOLS.len() == 58);

/// Marks code points that are not in the alphabet.
const INVALID: u8 = 0xff;

/// Maps 7-bit code points to digits.
#[allow(clippy::cast_lossless)]
const DIGITS: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < SYMBOLS.len() {
        let c = SYMBOLS[i] as usize;
        assert!(table[c] == INVALID, "duplicate symbol");
        // `i < 58`, so it fits in a `u8`.
        table[c] = i as u8;
        // Cannot overflow since `i < 58`.
        #[allow(clippy::arithmetic_side_effects)]
        {
            i += 1;
        }
    }
    table
};

/// Returns the digit for `c`, if it is a symbol.
#[inline]
pub(crate) fn digit(c: char) -> Option<u8> {
    let idx = usize::try_from(u32::from(c)).ok()?;
    match DIGITS.get(idx) {
        Some(&d) if d != INVALID => Some(d),
        _ => None,
    }
}

/// Returns the symbol for digit `d`.
///
/// `d` must be less than 58.
#[inline]
pub(crate) fn symbol(d: u8) -> char {
    char::from(SYMBOLS[usize::from(d)])
}
