// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Rabin Cryptosystem
//!
//! Public-key encryption by modular squaring over a Blum integer n = p·q,
//! where p and q are primes congruent to 3 mod 4. Encryption computes
//! c = m² mod n; decryption recovers all four square roots of c via the
//! Chinese Remainder Theorem, using the closed-form root formula the Blum
//! condition makes available.
//!
//! Reference: [Rabin (1979), MIT/LCS/TR-212](https://apps.dtic.mil/sti/citations/ADA078415)
//!
//! ## Security
//!
//! Recovering an arbitrary plaintext from a ciphertext is provably as hard
//! as factoring n. Decryption is inherently four-way ambiguous: the caller
//! receives all four candidate roots and must disambiguate, e.g. through
//! redundancy in the plaintext encoding. No padding scheme is provided.
//! The private key (p, q) is zeroized on drop via the `zeroize` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rabin::{KeyPair, Rabin};
//!
//! let keypair = KeyPair::new(512).expect("key generation failed");
//! let message = "Hello world!";
//!
//! let ciphertext = Rabin::encrypt_bytes(keypair.public_key(), message).expect("encryption failed");
//! let roots = Rabin::decrypt(keypair.private_key(), &ciphertext).expect("decryption failed");
//! assert!(roots
//!     .candidate_bytes()
//!     .iter()
//!     .any(|candidate| candidate == message.as_bytes()));
//! ```

mod ciphertext;
mod error;
mod key;
mod rabin;
mod roots;
mod util;

pub use ciphertext::*;
pub use error::*;
pub use key::*;
pub use rabin::*;
pub use roots::*;
pub use util::{blum_prime, ext_gcd};
