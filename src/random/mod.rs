//! Cryptographically secure random sampling: raw bytes, fixed-width random
//! bit-strings, and uniform sampling over an arbitrary closed interval by
//! rejection.

use crate::bigint::bit_length;
use crate::error::{PaillierError, PaillierErrorKind};
use num_bigint::{BigInt, Sign};
use rand::rngs::OsRng;
use rand::RngCore;

/// `k` cryptographically secure random bytes from the platform CSPRNG.
pub fn rand_bytes(k: usize) -> Result<Vec<u8>, PaillierError> {
    if k < 1 {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "randBytes requires at least one byte",
        ));
    }

    let mut buf = vec![0u8; k];
    OsRng.fill_bytes(&mut buf);
    Ok(buf)
}

/// `b` random bits packed into `ceil(b/8)` bytes: excess high bits of the
/// first byte are masked off, and `force_top` (when set) forces bit `b-1` of
/// the resulting integer to `1` so its bit-length is exactly `b`.
pub fn rand_bits(b: u64, force_top: bool) -> Result<BigInt, PaillierError> {
    if b < 1 {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "randBits requires a positive bit count",
        ));
    }

    let byte_len = ((b + 7) / 8) as usize;
    let mut bytes = rand_bytes(byte_len)?;

    let excess_bits = (byte_len as u64 * 8) - b;
    if excess_bits > 0 {
        bytes[0] &= 0xffu8 >> excess_bits;
    }

    if force_top {
        let top_bit_index = (b - 1) % 8;
        bytes[0] |= 1u8 << top_bit_index;
    }

    Ok(BigInt::from_bytes_be(Sign::Plus, &bytes))
}

/// Uniform integer in `[min, max]` by rejection sampling on the bit-length of
/// the window `W = max - min`. Fails when `max <= min`.
pub fn rand_between(max: &BigInt, min: &BigInt) -> Result<BigInt, PaillierError> {
    if max <= min {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "randBetween requires max > min",
        ));
    }

    let window = max - min;
    let bits = bit_length(&window);

    loop {
        let candidate = rand_bits(bits, false)?;
        if candidate <= window {
            return Ok(candidate + min);
        }
    }
}

#[cfg(test)]
mod random_test;
