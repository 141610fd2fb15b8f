use super::*;
use num_bigint::BigInt;

#[test]
fn abs_is_always_nonnegative() {
    assert_eq!(abs(&BigInt::from(-7)), BigInt::from(7));
    assert_eq!(abs(&BigInt::from(7)), BigInt::from(7));
    assert_eq!(abs(&BigInt::from(0)), BigInt::from(0));
}

#[test]
fn bit_length_matches_known_values() {
    assert_eq!(bit_length(&BigInt::from(0)), 0);
    assert_eq!(bit_length(&BigInt::from(1)), 1);
    assert_eq!(bit_length(&BigInt::from(2)), 2);
    assert_eq!(bit_length(&BigInt::from(255)), 8);
    assert_eq!(bit_length(&BigInt::from(256)), 9);
}

#[test]
fn gcd_known_cases() {
    assert_eq!(gcd(&BigInt::from(0), &BigInt::from(0)), BigInt::from(0));
    assert_eq!(gcd(&BigInt::from(0), &BigInt::from(5)), BigInt::from(5));
    assert_eq!(gcd(&BigInt::from(48), &BigInt::from(18)), BigInt::from(6));
    assert_eq!(gcd(&BigInt::from(-48), &BigInt::from(18)), BigInt::from(6));
    assert_eq!(gcd(&BigInt::from(17), &BigInt::from(19)), BigInt::from(1));
}

#[test]
fn e_gcd_satisfies_bezout_identity() {
    let a = BigInt::from(240);
    let b = BigInt::from(46);
    let (g, x, y) = e_gcd(&a, &b).unwrap();
    assert_eq!(g, BigInt::from(2));
    assert_eq!(&a * &x + &b * &y, g);
}

#[test]
fn e_gcd_rejects_nonpositive_args() {
    assert!(e_gcd(&BigInt::from(0), &BigInt::from(5)).is_err());
    assert!(e_gcd(&BigInt::from(5), &BigInt::from(-1)).is_err());
}

#[test]
fn lcm_known_cases() {
    assert_eq!(lcm(&BigInt::from(0), &BigInt::from(0)), BigInt::from(0));
    assert_eq!(lcm(&BigInt::from(4), &BigInt::from(6)), BigInt::from(12));
}

#[test]
fn to_zn_canonicalizes_negatives() {
    assert_eq!(to_zn(&BigInt::from(-1), &BigInt::from(10)).unwrap(), BigInt::from(9));
    assert_eq!(to_zn(&BigInt::from(13), &BigInt::from(10)).unwrap(), BigInt::from(3));
    assert!(to_zn(&BigInt::from(1), &BigInt::from(0)).is_err());
}

#[test]
fn mod_inv_law_holds_when_defined() {
    let n = BigInt::from(143);
    let a = BigInt::from(7);
    let inv = mod_inv(&a, &n).unwrap();
    assert_eq!((&a * &inv) % &n, BigInt::from(1));
}

#[test]
fn mod_inv_fails_without_coprimality() {
    // gcd(6, 9) = 3
    assert!(mod_inv(&BigInt::from(6), &BigInt::from(9)).is_err());
}

#[test]
fn mod_pow_base_laws() {
    let a = BigInt::from(7);
    let n = BigInt::from(143);
    assert_eq!(mod_pow(&a, &BigInt::from(0), &n).unwrap(), BigInt::from(1));
    assert_eq!(mod_pow(&a, &BigInt::from(1), &n).unwrap(), BigInt::from(7));
}

#[test]
fn mod_pow_is_additive_in_the_exponent() {
    let a = BigInt::from(11);
    let n = BigInt::from(143);
    let (b, c) = (BigInt::from(17), BigInt::from(23));

    let lhs = mod_pow(&a, &(&b + &c), &n).unwrap();
    let rhs = (mod_pow(&a, &b, &n).unwrap() * mod_pow(&a, &c, &n).unwrap()) % &n;
    assert_eq!(lhs, rhs);
}

#[test]
fn mod_pow_supports_negative_exponents() {
    let a = BigInt::from(7);
    let n = BigInt::from(143);
    let positive = mod_pow(&a, &BigInt::from(5), &n).unwrap();
    let negative = mod_pow(&a, &BigInt::from(-5), &n).unwrap();
    assert_eq!((positive * negative) % &n, BigInt::from(1));
}

#[test]
fn mod_pow_rejects_zero_modulus() {
    assert!(mod_pow(&BigInt::from(2), &BigInt::from(3), &BigInt::from(0)).is_err());
}
