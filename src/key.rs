// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};
use crate::util::blum_prime;

use num_bigint_dig::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Smallest accepted modulus size in bits.
///
/// Below this the pool of Blum primes of half the modulus length is too
/// small to guarantee two distinct factors (11 is the only 4-bit Blum
/// prime). Sizes near the minimum are only useful for testing; anything
/// under 2048 bits is cryptographically weak.
pub const MIN_BIT_LENGTH: usize = 16;

/// Public half of a Rabin key: the Blum integer n = p·q.
///
/// Deliberately carries no private material, so it can be persisted or
/// shared without ever exposing the factorization alongside n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    n: BigUint,
    bit_length: usize,
}

impl PublicKey {
    /// Construct a public key from a modulus. The modulus must be non-zero.
    pub fn new(n: BigUint, bit_length: usize) -> Result<Self> {
        if n.is_zero() {
            return Err(Error::InvalidPublicKey);
        }
        Ok(Self { n, bit_length })
    }

    /// Return the public modulus `n`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the configured bit length of the modulus.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }
}

/// Private half of a Rabin key: the factorization n = p·q.
///
/// The `Zeroize` and `ZeroizeOnDrop` traits ensure that p and q are wiped
/// from memory when this struct is dropped. `num-bigint-dig` implements
/// `Zeroize` for `BigUint`, which zeroes the underlying digit vectors.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop, Clone)]
pub struct PrivateKey {
    #[zeroize(skip)]
    public_key: PublicKey,

    /// Blum prime factor p
    pub(crate) p: BigUint,

    /// Blum prime factor q
    pub(crate) q: BigUint,
}

impl PrivateKey {
    /// Construct a private key from its prime factors.
    ///
    /// Validates the Blum structure the decryptor depends on: p and q must
    /// be non-zero, distinct, congruent to 3 mod 4, and multiply to the
    /// modulus of `public_key`. With p = q the CRT combination degenerates
    /// (gcd(p, q) = p, not 1), so that case is rejected outright.
    pub fn new(public_key: PublicKey, p: BigUint, q: BigUint) -> Result<Self> {
        if p.is_zero() || q.is_zero() || p == q {
            return Err(Error::InvalidPrivateKey);
        }

        let three = BigUint::from(3u32);
        if &p % 4u32 != three || &q % 4u32 != three {
            return Err(Error::InvalidPrivateKey);
        }

        if &p * &q != *public_key.n() {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self { public_key, p, q })
    }

    /// Return a reference to the associated public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// A complete key pair. Secret material is zeroized when dropped.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Generates a new Rabin key pair with an n-bit Blum integer modulus,
    /// drawing entropy from the operating system.
    ///
    /// The primes p and q are independent Blum primes of `bit_length / 2`
    /// bits each, so |n| ≈ bit_length.
    pub fn new(bit_length: usize) -> Result<Self> {
        Self::new_with_rng(bit_length, &mut OsRng)
    }

    /// Generates a new key pair from a caller-supplied entropy source.
    ///
    /// The source must be cryptographically secure for production keys; a
    /// seeded generator is acceptable only for deterministic testing.
    pub fn new_with_rng<R: RngCore + CryptoRng>(bit_length: usize, rng: &mut R) -> Result<Self> {
        if bit_length < MIN_BIT_LENGTH {
            return Err(Error::InvalidKeySize {
                min: MIN_BIT_LENGTH,
                actual: bit_length,
            });
        }

        let prime_bits = bit_length / 2;
        let p = blum_prime(prime_bits, rng);

        // A collision is astronomically unlikely at cryptographic sizes,
        // but at test-scale bit lengths it can happen; redraw until the
        // factors are distinct.
        let q = loop {
            let q = blum_prime(prime_bits, rng);
            if q != p {
                break q;
            }
        };

        let n = &p * &q;
        let public = PublicKey::new(n, bit_length)?;
        let private = PrivateKey::new(public.clone(), p, q)?;

        Ok(Self { public, private })
    }

    /// Return the public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint_dig::prime::probably_prime;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_modulus_is_product_of_factors() {
        let keypair = KeyPair::new(256).unwrap();
        let private = keypair.private_key();
        assert_eq!(&private.p * &private.q, *keypair.public_key().n());
    }

    #[test]
    fn generated_factors_are_distinct_blum_primes() {
        let keypair = KeyPair::new(256).unwrap();
        let private = keypair.private_key();

        assert_ne!(private.p, private.q);
        for factor in [&private.p, &private.q] {
            assert_eq!(factor % 4u32, BigUint::from(3u32));
            assert!(probably_prime(factor, 20));
            assert_eq!(factor.bits(), 128);
        }
    }

    #[test]
    fn rejects_bit_length_below_minimum() {
        for bits in [0, 1, 8, MIN_BIT_LENGTH - 1] {
            let result = KeyPair::new(bits);
            assert_eq!(
                result.err(),
                Some(Error::InvalidKeySize {
                    min: MIN_BIT_LENGTH,
                    actual: bits,
                })
            );
        }
    }

    #[test]
    fn minimum_bit_length_is_accepted() {
        let keypair = KeyPair::new(MIN_BIT_LENGTH).unwrap();
        let private = keypair.private_key();
        assert_ne!(private.p, private.q);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let k1 = KeyPair::new_with_rng(128, &mut StdRng::seed_from_u64(99)).unwrap();
        let k2 = KeyPair::new_with_rng(128, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(k1.public_key(), k2.public_key());
    }

    #[test]
    fn public_key_rejects_zero_modulus() {
        let result = PublicKey::new(BigUint::from(0u32), 8);
        assert_eq!(result.err(), Some(Error::InvalidPublicKey));
    }

    #[test]
    fn private_key_rejects_equal_factors() {
        let p = BigUint::from(7u32);
        let public = PublicKey::new(&p * &p, 6).unwrap();
        let result = PrivateKey::new(public, p.clone(), p);
        assert_eq!(result.err(), Some(Error::InvalidPrivateKey));
    }

    #[test]
    fn private_key_rejects_non_blum_factor() {
        // 13 is prime but 13 ≡ 1 (mod 4)
        let p = BigUint::from(13u32);
        let q = BigUint::from(7u32);
        let public = PublicKey::new(&p * &q, 7).unwrap();
        let result = PrivateKey::new(public, p, q);
        assert_eq!(result.err(), Some(Error::InvalidPrivateKey));
    }

    #[test]
    fn private_key_rejects_mismatched_modulus() {
        let p = BigUint::from(7u32);
        let q = BigUint::from(11u32);
        let public = PublicKey::new(BigUint::from(91u32), 7).unwrap();
        let result = PrivateKey::new(public, p, q);
        assert_eq!(result.err(), Some(Error::InvalidPrivateKey));
    }
}
