// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::key::{PrivateKey, PublicKey};
use crate::roots::Roots;
use crate::util::ext_gcd;

pub struct Rabin;

impl Rabin {
    /// Encrypts a plaintext integer: c = m² mod n.
    ///
    /// ## Plaintext Space
    ///
    /// The meaningful message space is 0 ≤ m < n. Larger values are not
    /// rejected here; they silently wrap modulo n, so a caller that needs
    /// exact recovery must bound m itself (or use [`Rabin::encrypt_bytes`],
    /// which does).
    pub fn encrypt(pub_key: &PublicKey, m: &BigUint) -> Ciphertext {
        let c = m.modpow(&BigUint::from(2u32), pub_key.n());
        Ciphertext::new(c)
    }

    /// Encrypts a byte string, interpreted as a big-endian integer.
    ///
    /// Unlike [`Rabin::encrypt`], this rejects plaintexts that do not fit
    /// below the modulus, since wrapped values cannot be recovered.
    pub fn encrypt_bytes<P: AsRef<[u8]>>(pub_key: &PublicKey, plaintext: P) -> Result<Ciphertext> {
        let m = BigUint::from_bytes_be(plaintext.as_ref());
        if &m >= pub_key.n() {
            return Err(Error::PlaintextTooLarge);
        }
        Ok(Self::encrypt(pub_key, &m))
    }

    /// Decrypts a ciphertext to the four square roots of c modulo n.
    ///
    /// Because p, q ≡ 3 (mod 4), the roots modulo each prime have the
    /// closed form ±c^((p+1)/4) mod p. The four combinations of those
    /// per-prime roots are lifted to roots mod n through the CRT, using
    /// Bezout coefficients y_p·p + y_q·q = 1 from [`ext_gcd`]:
    ///
    /// d = y_p·p·m_q + y_q·q·m_p (mod n)
    pub fn decrypt(priv_key: &PrivateKey, ciphertext: &Ciphertext) -> Result<Roots> {
        let n = priv_key.public_key().n();
        let c = ciphertext.value();
        if c >= n {
            return Err(Error::InvalidCiphertext);
        }

        let p = &priv_key.p;
        let q = &priv_key.q;
        let one = BigUint::one();

        // Square roots of c modulo each prime; the second root of each pair
        // is the negation of the first.
        let m_p1 = c.modpow(&((p + &one) >> 2), p);
        let m_p2 = p - &m_p1;
        let m_q1 = c.modpow(&((q + &one) >> 2), q);
        let m_q2 = q - &m_q1;

        let p_int = BigInt::from(p.clone());
        let q_int = BigInt::from(q.clone());
        let n_int = BigInt::from(n.clone());

        let (g, y_p, y_q) = ext_gcd(&p_int, &q_int);
        if !g.is_one() {
            // Factors sharing a divisor (e.g. p == q, or composite inputs)
            // make the CRT combination meaningless.
            return Err(Error::InvalidPrivateKey);
        }

        let y_p_p = y_p * &p_int;
        let y_q_q = y_q * &q_int;
        let combine = |m_q: &BigUint, m_p: &BigUint| -> BigUint {
            let d = &y_p_p * BigInt::from(m_q.clone()) + &y_q_q * BigInt::from(m_p.clone());
            d.mod_floor(&n_int)
                .to_biguint()
                .expect("residue mod a positive modulus is non-negative")
        };

        Ok(Roots::new([
            combine(&m_q1, &m_p1),
            combine(&m_q2, &m_p1),
            combine(&m_q1, &m_p2),
            combine(&m_q2, &m_p2),
        ]))
    }
}
