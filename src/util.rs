// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigInt, BigUint, RandPrime};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Generates a random Blum prime, i.e. a probable prime p with p ≡ 3 (mod 4).
///
/// Draws random probable primes of the requested bit length until one lands
/// in the right residue class. Asymptotically half of all odd primes qualify,
/// so the loop terminates after ~2 draws in expectation. The underlying
/// `gen_prime` runs Miller-Rabin with enough rounds that the false-positive
/// probability is negligible (well below 2⁻¹⁰⁰).
pub fn blum_prime<R: RngCore + CryptoRng>(bit_length: usize, rng: &mut R) -> BigUint {
    let three = BigUint::from(3u32);
    loop {
        let p = rng.gen_prime(bit_length);
        if &p % 4u32 == three {
            return p;
        }
    }
}

/// Iterative extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a·x + b·y = g = gcd(a, b)`, by successive
/// remainder substitution in O(log min(a, b)) iterations. For the coprime
/// inputs the decryptor feeds it, g is 1 and (x, y) are the Bezout
/// coefficients used for CRT reconstruction.
pub fn ext_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint_dig::prime::probably_prime;
    use rand::rngs::OsRng;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn blum_prime_is_3_mod_4() {
        let mut rng = OsRng;
        for _ in 0..4 {
            let p = blum_prime(64, &mut rng);
            assert_eq!(&p % 4u32, BigUint::from(3u32));
            assert!(probably_prime(&p, 20));
        }
    }

    #[test]
    fn blum_prime_has_requested_bit_length() {
        let mut rng = OsRng;
        let p = blum_prime(128, &mut rng);
        assert_eq!(p.bits(), 128);
    }

    #[test]
    fn blum_prime_is_deterministic_under_seeded_rng() {
        let p1 = blum_prime(64, &mut StdRng::seed_from_u64(42));
        let p2 = blum_prime(64, &mut StdRng::seed_from_u64(42));
        assert_eq!(p1, p2);
    }

    #[test]
    fn ext_gcd_known_values() {
        let (g, x, y) = ext_gcd(&BigInt::from(240), &BigInt::from(46));
        assert_eq!(g, BigInt::from(2));
        assert_eq!(BigInt::from(240) * x + BigInt::from(46) * y, g);
    }

    #[test]
    fn ext_gcd_bezout_identity_for_coprime_inputs() {
        let pairs = [(17u32, 13u32), (101, 103), (65_537, 4_294_967_291)];
        for (a, b) in pairs {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let (g, x, y) = ext_gcd(&a, &b);
            assert_eq!(g, BigInt::one());
            assert_eq!(&a * x + &b * y, BigInt::one());
        }
    }

    #[test]
    fn ext_gcd_of_generated_primes_is_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = BigInt::from(blum_prime(64, &mut rng));
        let q = BigInt::from(blum_prime(64, &mut rng));
        let (g, x, y) = ext_gcd(&p, &q);
        assert_eq!(g, BigInt::one());
        assert_eq!(&p * x + &q * y, BigInt::one());
    }

    #[test]
    fn ext_gcd_with_zero() {
        let (g, x, _) = ext_gcd(&BigInt::from(42), &BigInt::zero());
        assert_eq!(g, BigInt::from(42));
        assert_eq!(x, BigInt::one());
    }
}
