//! Cryptographic primitives for cryptocore.
//!
//! This module provides:
//! - The `CryptoCore` contract (`contract`)
//! - AES-GCM encryption and decryption (`symmetric`)
//! - Argon2id salted hashing (`hashing`)
//! - CSPRNG helpers (`random`)
//! - The RSA adapter (`rsa_aes`) and the X25519/Ed25519 adapter (`ed_aes`)

pub mod contract;
pub mod ed_aes;
pub mod hashing;
pub mod random;
pub mod rsa_aes;
pub mod symmetric;

// Re-export the most commonly used items so callers can write:
//   use cryptocore::crypto::{CryptoCore, RsaAesCore, SymmetricKey, ...};
pub use contract::CryptoCore;
pub use ed_aes::{EcKeyPair, EcPrivateKey, EcPublicKey, EdAesCore};
pub use hashing::{generate_salt, salted_hash, Argon2Params};
pub use random::{fill_random, random, random_bytes};
pub use rsa_aes::{RsaAesCore, RsaKeyPair};
pub use symmetric::SymmetricKey;
