//! The Paillier public-key cryptosystem: key generation, encryption,
//! decryption, the additively-homomorphic ciphertext operations, and
//! recovery of the encryption randomness in the simple-generator variant.

use crate::bigint::{gcd, lcm, mod_inv, mod_pow, to_zn};
use crate::error::{PaillierError, PaillierErrorKind};
use crate::primality::{prime, prime_async, DEFAULT_MR_ITERATIONS};
use crate::random::rand_between;
use num_bigint::BigInt;
use num_traits::One;

/// Default modulus bit length used by [`generate_random_keys`]/[`generate_random_keys_sync`]
/// when callers don't have a specific size in mind.
pub const DEFAULT_KEY_BITS: u64 = 3072;

/// Upper bound on how many times key generation will redraw a degenerate
/// general-variant generator before giving up; this can only be hit by an
/// adversarial or badly broken CSPRNG, never in ordinary operation.
const MAX_GENERATOR_ATTEMPTS: u32 = 1000;

/// An immutable Paillier public key `(n, g, n^2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    n: BigInt,
    g: BigInt,
    n2: BigInt,
}

impl PublicKey {
    pub fn n(&self) -> &BigInt {
        &self.n
    }

    pub fn g(&self) -> &BigInt {
        &self.g
    }

    pub fn n2(&self) -> &BigInt {
        &self.n2
    }

    pub fn bit_length(&self) -> u64 {
        crate::bigint::bit_length(&self.n)
    }

    /// `encrypt(m, r?) = g^m * r^n mod n^2`. When `r` is omitted, one is
    /// drawn uniformly from `[1, n)` subject to `gcd(r, n) = 1`.
    pub fn encrypt(&self, m: &BigInt, r: Option<&BigInt>) -> Result<BigInt, PaillierError> {
        let r_owned;
        let r = match r {
            Some(r) => r,
            None => {
                r_owned = self.sample_r()?;
                &r_owned
            }
        };

        let gm = mod_pow(&self.g, m, &self.n2)?;
        let rn = mod_pow(r, &self.n, &self.n2)?;
        to_zn(&(gm * rn), &self.n2)
    }

    fn sample_r(&self) -> Result<BigInt, PaillierError> {
        loop {
            let r = rand_between(&(&self.n - BigInt::one()), &BigInt::one())?;
            // gcd(r, n) = 1 iff gcd(r, n^2) = 1, so checking against n suffices.
            if gcd(&r, &self.n) == BigInt::one() {
                return Ok(r);
            }
        }
    }

    /// Homomorphic addition: `c_1 * c_2 * ... * c_k mod n^2`, `k >= 2`.
    /// Decrypts to the sum of the corresponding plaintexts mod `n`.
    pub fn addition(&self, ciphertexts: &[BigInt]) -> Result<BigInt, PaillierError> {
        if ciphertexts.len() < 2 {
            return Err(PaillierError::new(
                PaillierErrorKind::InvalidArgument,
                "addition requires at least two ciphertexts",
            ));
        }

        let mut acc = BigInt::one();
        for c in ciphertexts {
            acc = (acc * c) % &self.n2;
        }
        to_zn(&acc, &self.n2)
    }

    /// Pseudo-homomorphic scalar multiply: `c^k mod n^2`. Decrypts to `k * m mod n`.
    pub fn multiply(&self, c: &BigInt, k: &BigInt) -> Result<BigInt, PaillierError> {
        mod_pow(c, k, &self.n2)
    }
}

/// An immutable Paillier private key `(lambda, mu, publicKey, p, q)`.
/// `p`/`q` may be absent when the key was reconstructed without them; they
/// are required only by [`PrivateKey::get_random_factor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    lambda: BigInt,
    mu: BigInt,
    public_key: PublicKey,
    p: Option<BigInt>,
    q: Option<BigInt>,
}

impl PrivateKey {
    pub fn lambda(&self) -> &BigInt {
        &self.lambda
    }

    pub fn mu(&self) -> &BigInt {
        &self.mu
    }

    pub fn n(&self) -> &BigInt {
        &self.public_key.n
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn p(&self) -> Option<&BigInt> {
        self.p.as_ref()
    }

    pub fn q(&self) -> Option<&BigInt> {
        self.q.as_ref()
    }

    /// `decrypt(c) = L(c^lambda mod n^2) * mu mod n`.
    pub fn decrypt(&self, c: &BigInt) -> Result<BigInt, PaillierError> {
        let x = mod_pow(c, &self.lambda, &self.public_key.n2)?;
        let l = l_function(&x, &self.public_key.n);
        to_zn(&(l * &self.mu), &self.public_key.n)
    }

    /// Recover the randomness `r` used by `encrypt(m, r)`. Requires the
    /// simple-generator variant (`g = n + 1`) and that `p`, `q` are present.
    pub fn get_random_factor(&self, c: &BigInt) -> Result<BigInt, PaillierError> {
        let n = &self.public_key.n;
        if self.public_key.g != n + BigInt::one() {
            return Err(PaillierError::new(
                PaillierErrorKind::InvalidState,
                "getRandomFactor requires the simple-generator variant (g = n + 1)",
            ));
        }
        let (p, q) = match (&self.p, &self.q) {
            (Some(p), Some(q)) => (p, q),
            _ => {
                return Err(PaillierError::new(
                    PaillierErrorKind::InvalidState,
                    "getRandomFactor requires p and q to be present",
                ))
            }
        };

        let m = self.decrypt(c)?;
        let phi = (p - BigInt::one()) * (q - BigInt::one());
        let n_inv_mod_phi = mod_inv(n, &phi)?;

        let c1 = to_zn(&(c * (BigInt::one() - &m * n)), &self.public_key.n2)?;
        mod_pow(&c1, &n_inv_mod_phi, n)
    }
}

/// An immutable `{ publicKey, privateKey }` pair, with `privateKey.publicKey`
/// identically the stored `publicKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl KeyPair {
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

/// `L(x) = (x - 1) / n`, defined for `x` congruent to `1 mod n`.
fn l_function(x: &BigInt, n: &BigInt) -> BigInt {
    (x - BigInt::one()) / n
}

/// Draw `alpha, beta` uniformly in `[1, n)` and return
/// `((alpha * n + 1) * beta^n) mod n^2`, an element of order a multiple of
/// `n` with overwhelming probability.
fn get_generator(n: &BigInt, n2: &BigInt) -> Result<BigInt, PaillierError> {
    let upper = n - BigInt::one();
    let alpha = rand_between(&upper, &BigInt::one())?;
    let beta = rand_between(&upper, &BigInt::one())?;

    let term1 = to_zn(&(alpha * n + BigInt::one()), n2)?;
    let term2 = mod_pow(&beta, n, n2)?;
    to_zn(&(term1 * term2), n2)
}

/// `mu = (L(g^lambda mod n^2))^(-1) mod n`; fails with `NoInverse` when the
/// generator is degenerate.
fn compute_mu(g: &BigInt, lambda: &BigInt, n: &BigInt, n2: &BigInt) -> Result<BigInt, PaillierError> {
    let x = mod_pow(g, lambda, n2)?;
    let l = l_function(&x, n);
    mod_inv(&l, n)
}

/// Construct a key pair from given primes `p != q`. The general variant: if
/// `g` is omitted, [`get_generator`] is sampled (and redrawn on a degenerate
/// `mu`, bounded by `MAX_GENERATOR_ATTEMPTS`); `lambda = lcm(p-1, q-1)`.
pub fn keys_from_primes(
    p: &BigInt,
    q: &BigInt,
    g: Option<&BigInt>,
) -> Result<KeyPair, PaillierError> {
    let n = p * q;
    let n2 = &n * &n;
    let lambda = lcm(&(p - BigInt::one()), &(q - BigInt::one()));

    let (g, mu) = match g {
        Some(g) => {
            let mu = compute_mu(g, &lambda, &n, &n2)?;
            (g.clone(), mu)
        }
        None => {
            let mut attempts = 0u32;
            loop {
                attempts += 1;
                let candidate_g = get_generator(&n, &n2)?;
                match compute_mu(&candidate_g, &lambda, &n, &n2) {
                    Ok(mu) => break (candidate_g, mu),
                    Err(e) if e.kind() == PaillierErrorKind::NoInverse => {
                        log::debug!("degenerate Paillier generator, retrying (attempt {attempts})");
                        if attempts >= MAX_GENERATOR_ATTEMPTS {
                            return Err(PaillierError::new(
                                PaillierErrorKind::NoInverse,
                                "exhausted generator retries without finding an invertible mu",
                            ));
                        }
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    };

    let public_key = PublicKey { n, g, n2 };
    let private_key = PrivateKey {
        lambda,
        mu,
        public_key: public_key.clone(),
        p: Some(p.clone()),
        q: Some(q.clone()),
    };
    Ok(KeyPair {
        public_key,
        private_key,
    })
}

/// Construct a key pair from given primes using the simple-generator
/// variant: `g = n + 1`, `lambda = (p-1)(q-1)`, `mu = lambda^(-1) mod n`.
/// This is the only variant [`PrivateKey::get_random_factor`] supports.
pub fn keys_from_primes_simple(p: &BigInt, q: &BigInt) -> Result<KeyPair, PaillierError> {
    let n = p * q;
    let n2 = &n * &n;
    let g = &n + BigInt::one();
    let lambda = (p - BigInt::one()) * (q - BigInt::one());
    let mu = mod_inv(&lambda, &n)?;

    let public_key = PublicKey { n, g, n2 };
    let private_key = PrivateKey {
        lambda,
        mu,
        public_key: public_key.clone(),
        p: Some(p.clone()),
        q: Some(q.clone()),
    };
    Ok(KeyPair {
        public_key,
        private_key,
    })
}

fn prime_bit_split(bits: u64) -> (u64, u64) {
    let half = bits / 2;
    (half + 1, half)
}

fn validate_key_bits(bits: u64) -> Result<(), PaillierError> {
    if bits < 4 {
        return Err(PaillierError::new(
            PaillierErrorKind::InvalidArgument,
            "key bit length must be at least 4",
        ));
    }
    Ok(())
}

/// Generate a fresh random key pair of exactly `bits` bits, single-threaded.
/// Redraws `p`/`q` whenever they collide or the product misses the declared
/// bit length.
pub fn generate_random_keys_sync(bits: u64, simple_variant: bool) -> Result<KeyPair, PaillierError> {
    validate_key_bits(bits)?;
    let (p_bits, q_bits) = prime_bit_split(bits);

    loop {
        let p = prime(p_bits, DEFAULT_MR_ITERATIONS)?;
        let q = prime(q_bits, DEFAULT_MR_ITERATIONS)?;

        if p == q || crate::bigint::bit_length(&(&p * &q)) != bits {
            log::debug!("key generation redraw: prime collision or bit-length mismatch");
            continue;
        }

        return if simple_variant {
            keys_from_primes_simple(&p, &q)
        } else {
            keys_from_primes(&p, &q, None)
        };
    }
}

/// Asynchronous form of [`generate_random_keys_sync`]: `p` and `q` are each
/// searched for on a Tokio worker pool (see [`crate::primality::prime_async`]),
/// with the fastest winner in each search cancelling its siblings. Produces
/// the same output distribution as the synchronous form.
pub async fn generate_random_keys(bits: u64, simple_variant: bool) -> Result<KeyPair, PaillierError> {
    validate_key_bits(bits)?;
    let (p_bits, q_bits) = prime_bit_split(bits);

    loop {
        let (p, q) = tokio::try_join!(
            prime_async(p_bits, DEFAULT_MR_ITERATIONS),
            prime_async(q_bits, DEFAULT_MR_ITERATIONS),
        )?;

        if p == q || crate::bigint::bit_length(&(&p * &q)) != bits {
            log::debug!("key generation redraw: prime collision or bit-length mismatch");
            continue;
        }

        return if simple_variant {
            keys_from_primes_simple(&p, &q)
        } else {
            keys_from_primes(&p, &q, None)
        };
    }
}

/// A generator usable modulo two independently generated moduli `n1`, `n2`:
/// draw `r` uniformly in `[1, n1)` until `gcd(r, n1) = 1 AND gcd(r, n2) = 1`.
///
/// The reference implementation this scheme is drawn from loops on an OR of
/// the two gcd checks, which can return an `r` that still shares a factor
/// with one of the moduli; that looks like a bug rather than intent, so this
/// implementation requires both conditions.
pub fn generate_dual_g(n1: &BigInt, n2: &BigInt) -> Result<BigInt, PaillierError> {
    let upper = n1 - BigInt::one();
    loop {
        let r = rand_between(&upper, &BigInt::one())?;
        if gcd(&r, n1) == BigInt::one() && gcd(&r, n2) == BigInt::one() {
            return Ok(r);
        }
    }
}

/// `c^k mod n2`, using an externally supplied `n2` rather than the key's own
/// cached value. Used to interpret or combine a ciphertext under a different
/// modulus than the key's own.
pub fn multiply_other_n2(c: &BigInt, k: &BigInt, n2: &BigInt) -> Result<BigInt, PaillierError> {
    mod_pow(c, k, n2)
}
