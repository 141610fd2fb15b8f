use super::*;
use num_bigint::BigInt;

#[test]
fn rand_bytes_rejects_zero_length() {
    assert!(rand_bytes(0).is_err());
}

#[test]
fn rand_bytes_returns_requested_length() {
    assert_eq!(rand_bytes(32).unwrap().len(), 32);
}

#[test]
fn rand_bits_rejects_zero_bits() {
    assert!(rand_bits(0, false).is_err());
}

#[test]
fn rand_bits_has_exact_bit_length_when_forced() {
    for bits in [1, 7, 8, 9, 16, 17, 257] {
        for _ in 0..20 {
            let v = rand_bits(bits, true).unwrap();
            assert_eq!(bit_length(&v), bits, "bits = {}", bits);
        }
    }
}

#[test]
fn rand_bits_never_exceeds_requested_bits() {
    for bits in [1, 7, 8, 9, 16, 17, 257] {
        for _ in 0..50 {
            let v = rand_bits(bits, false).unwrap();
            assert!(bit_length(&v) <= bits, "bits = {}", bits);
        }
    }
}

#[test]
fn rand_between_rejects_degenerate_range() {
    assert!(rand_between(&BigInt::from(5), &BigInt::from(5)).is_err());
    assert!(rand_between(&BigInt::from(5), &BigInt::from(9)).is_err());
}

#[test]
fn rand_between_stays_within_bounds() {
    let (min, max) = (BigInt::from(1), BigInt::from(10));
    for _ in 0..2000 {
        let v = rand_between(&max, &min).unwrap();
        assert!(v >= min && v <= max);
    }
}

#[test]
fn rand_between_covers_a_single_element_window() {
    let v = rand_between(&BigInt::from(2), &BigInt::from(1)).unwrap();
    assert!(v == BigInt::from(1) || v == BigInt::from(2));
}

#[test]
fn rand_between_hits_every_value_in_a_small_range() {
    use std::collections::HashSet;
    let (min, max) = (BigInt::from(1), BigInt::from(10));
    let mut seen = HashSet::new();
    for _ in 0..5000 {
        seen.insert(rand_between(&max, &min).unwrap());
    }
    assert_eq!(seen.len(), 10, "expected all 10 values in [1, 10] to appear");
}
