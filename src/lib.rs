//! An additively-homomorphic Paillier public-key cryptosystem over `Z/n^2Z`.
//!
//! The crate is organized leaves-first: [`bigint`] provides the modular
//! arithmetic primitives, [`random`] the CSPRNG sampling, [`primality`] the
//! Miller-Rabin probable-prime test and search, and [`paillier`] the scheme
//! itself (key generation, encryption, decryption, the homomorphic
//! ciphertext operations, and randomness recovery in the simple-generator
//! variant).

pub mod bigint;
mod error;
pub mod paillier;
pub mod primality;
pub mod random;

pub use error::{PaillierError, PaillierErrorKind, PaillierResult};
