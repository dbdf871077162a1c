// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

/// The four square roots of a ciphertext modulo n = p·q.
///
/// Exactly one root is the original plaintext, but the scheme itself cannot
/// tell which: the quadruple consists of two complementary pairs (d, n − d),
/// and without redundancy in the plaintext encoding the candidates are
/// indistinguishable. Disambiguation is the caller's job.
///
/// The ordering is stable and matches the CRT pairings
/// (m_q1, m_p1), (m_q2, m_p1), (m_q1, m_p2), (m_q2, m_p2); callers may rely
/// on it for reproducibility, but it carries no security meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    roots: [BigUint; 4],
}

impl Roots {
    pub(crate) fn new(roots: [BigUint; 4]) -> Self {
        Self { roots }
    }

    /// The four candidates in CRT-pairing order.
    pub fn as_array(&self) -> &[BigUint; 4] {
        &self.roots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigUint> {
        self.roots.iter()
    }

    /// Whether the quadruple contains the given plaintext candidate.
    pub fn contains(&self, m: &BigUint) -> bool {
        self.roots.iter().any(|root| root == m)
    }

    /// Big-endian byte view of each candidate, for callers that encrypted a
    /// byte string and want to pick the decoding that matches.
    pub fn candidate_bytes(&self) -> [Vec<u8>; 4] {
        let bytes = |root: &BigUint| root.to_bytes_be();
        [
            bytes(&self.roots[0]),
            bytes(&self.roots[1]),
            bytes(&self.roots[2]),
            bytes(&self.roots[3]),
        ]
    }
}

impl IntoIterator for Roots {
    type Item = BigUint;
    type IntoIter = std::array::IntoIter<BigUint, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
