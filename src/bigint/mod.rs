//! Arbitrary-precision modular arithmetic primitives used throughout the scheme.
//!
//! Everything here is a thin, explicitly-erroring layer over [`num_bigint::BigInt`]:
//! the crate's `BigUint`/`BigInt` already give correct add/mul/shift, but the
//! specific reduction, inversion and exponentiation semantics the scheme relies
//! on (canonical-nonnegative residues, reduce-every-step `modPow`, binary `gcd`)
//! are not exactly what the library exposes off the shelf, so we own them here.

use crate::error::{PaillierError, PaillierErrorKind};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Mathematical absolute value.
pub fn abs(a: &BigInt) -> BigInt {
    a.abs()
}

/// Number of bits required to represent `|a|`; `0` for `a == 0`, `1` for `a == 1`.
pub fn bit_length(a: &BigInt) -> u64 {
    a.magnitude().bits()
}

/// Binary GCD. Always nonnegative. `gcd(a, 0) == |a|`, `gcd(0, 0) == 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    let mut shift: u64 = 0;
    while a.is_even() && b.is_even() {
        a >>= 1;
        b >>= 1;
        shift += 1;
    }
    while a.is_even() {
        a >>= 1;
    }

    loop {
        while b.is_even() {
            b >>= 1;
        }
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= &a;
        if b.is_zero() {
            break;
        }
    }

    a << shift
}

/// Iterative extended Euclidean algorithm. For positive `a, b` returns `(g, x, y)`
/// with `a*x + b*y == g == gcd(a, b)`.
pub fn e_gcd(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt, BigInt), PaillierError> {
    if a <= &BigInt::zero() || b <= &BigInt::zero() {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "eGcd requires both arguments to be positive",
        ));
    }

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let new_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, new_r);

        let new_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, new_s);

        let new_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, new_t);
    }

    Ok((old_r, old_s, old_t))
}

/// `|a*b| / gcd(a, b)`; `lcm(0, 0) == 0`.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() && b.is_zero() {
        return BigInt::zero();
    }
    (a * b).abs() / gcd(a, b)
}

/// Canonical representative of `a` in `[0, n)`.
pub fn to_zn(a: &BigInt, n: &BigInt) -> Result<BigInt, PaillierError> {
    if n <= &BigInt::zero() {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "toZn requires a positive modulus",
        ));
    }

    let r = a % n;
    if r.is_negative() {
        Ok(r + n)
    } else {
        Ok(r)
    }
}

/// Inverse of `a` modulo `n`, via `eGcd(toZn(a, n), n)`.
pub fn mod_inv(a: &BigInt, n: &BigInt) -> Result<BigInt, PaillierError> {
    if n <= &BigInt::zero() {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "modInv requires a positive modulus",
        ));
    }

    let a_zn = to_zn(a, n)?;
    if a_zn.is_zero() {
        return Err(PaillierError::new(
            PaillierErrorKind::NoInverse,
            "0 has no inverse modulo n",
        ));
    }

    let (g, x, _y) = e_gcd(&a_zn, n)?;
    if g != BigInt::one() {
        return Err(PaillierError::new(
            PaillierErrorKind::NoInverse,
            format!("gcd(a, n) = {} != 1", g),
        ));
    }

    to_zn(&x, n)
}

/// `a^b mod n` by right-to-left square-and-multiply, reducing every step.
/// Negative `b` is handled by inverting the positive-exponent result.
/// Result is always in `[0, n)`.
pub fn mod_pow(a: &BigInt, b: &BigInt, n: &BigInt) -> Result<BigInt, PaillierError> {
    if n.is_zero() {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "modPow requires a nonzero modulus",
        ));
    }

    if b.is_negative() {
        let positive = mod_pow(a, &-b, n)?;
        return mod_inv(&positive, n);
    }

    let mut result = to_zn(&BigInt::one(), n)?;
    let mut base = to_zn(a, n)?;
    let mut exp = b.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % n;
        }
        base = (&base * &base) % n;
        exp >>= 1;
    }

    to_zn(&result, n)
}

#[cfg(test)]
mod bigint_test;
