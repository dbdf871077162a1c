// SPDX-License-Identifier: MIT OR Apache-2.0

use std::ops::{Deref, Mul};

use num_bigint_dig::BigUint;

/// A Rabin ciphertext, c = m² mod n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Big-endian byte representation of the ciphertext.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }
}

impl Deref for Ciphertext {
    type Target = BigUint;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> From<T> for Ciphertext
where
    T: AsRef<[u8]>,
{
    fn from(data: T) -> Self {
        Self {
            value: BigUint::from_bytes_be(data.as_ref()),
        }
    }
}

// Homomorphic multiplication: E(m₁) · E(m₂) ≡ E(m₁·m₂) (mod n).
// The product is not reduced; the caller reduces mod n before decrypting.
impl Mul for &Ciphertext {
    type Output = Ciphertext;

    fn mul(self, rhs: Self) -> Ciphertext {
        Ciphertext::new(&self.value * &rhs.value)
    }
}

impl Mul for Ciphertext {
    type Output = Ciphertext;

    fn mul(self, rhs: Self) -> Ciphertext {
        Ciphertext::new(self.value * rhs.value)
    }
}
