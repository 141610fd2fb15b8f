//! The Paillier additively-homomorphic cryptosystem.
//!
//! See the crate-level documentation for the algorithms backing key
//! generation, encryption/decryption and the homomorphic operations.

mod scheme;

pub use scheme::{
    generate_dual_g, generate_random_keys, generate_random_keys_sync, keys_from_primes,
    keys_from_primes_simple, multiply_other_n2, KeyPair, PrivateKey, PublicKey, DEFAULT_KEY_BITS,
};
