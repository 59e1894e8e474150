//! In-place radix conversion, one digit at a time.

/// Divides the big-endian base-256 number `number[start..]` by
/// 58. Returns the remainder and leaves the quotient (still in
/// base 256) in `number`.
pub(crate) fn divmod58(number: &mut [u8], start: usize) -> u8 {
    div_rem::<256, 58>(number, start)
}

/// Divides the big-endian base-58 number `number[start..]` by
/// 256. Returns the remainder and leaves the quotient (still
/// in base 58) in `number`.
pub(crate) fn divmod256(number: &mut [u8], start: usize) -> u8 {
    div_rem::<58, 256>(number, start)
}

/// Returns the index of the first non-zero digit in
/// `number[start..]`, or `number.len()`.
// Cannot overflow: the sum is at most `number.len()`.
#[allow(clippy::arithmetic_side_effects)]
pub(crate) fn skip_zeros(number: &[u8], start: usize) -> usize {
    start + number.iter().skip(start).take_while(|&&d| d == 0).count()
}

/// Long division of the big-endian base-`FROM` number
/// `number[start..]` by `TO`.
///
/// Every digit must be less than `FROM`.
// Cannot overflow: `rem < TO <= 256` and each digit is less
// than `FROM <= 256`, so `t < 2^16`. `TO` is never zero.
#[allow(clippy::arithmetic_side_effects)]
fn div_rem<const FROM: u32, const TO: u32>(number: &mut [u8], start: usize) -> u8 {
    let mut rem = 0u32;
    for x in number.iter_mut().skip(start) {
        let t = rem * FROM + u32::from(*x);
        // `t / TO < FROM <= 256`.
        *x = (t / TO) as u8;
        rem = t % TO;
    }
    rem as u8
}
