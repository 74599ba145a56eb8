//! Salted, iterated hashing using Argon2id.
//!
//! Argon2id is memory-hard, so the same function serves password hashing
//! and key stretching. Its cost parameters belong to the provider
//! configuration (`Argon2Params`, loaded from `cryptocore.toml` or
//! defaults), not to the `hash` call itself.

use argon2::{Algorithm, Argon2, Params, Version};

use crate::crypto::random::fill_random;
use crate::errors::{CryptoError, Result};

/// Minimum salt length in bytes (256 bits).
pub const MIN_SALT_LEN: usize = 32;

/// Length of the produced digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Minimum safe memory cost in KiB (8 MB).
const MIN_MEMORY_KIB: u32 = 8_192;

/// Configurable Argon2id parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Params {
    /// Reject parameter sets weaker than the enforced floor.
    pub fn validate(&self) -> Result<()> {
        if self.memory_kib < MIN_MEMORY_KIB {
            return Err(CryptoError::HashFailure(format!(
                "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
                self.memory_kib
            )));
        }
        if self.iterations < 1 {
            return Err(CryptoError::HashFailure(
                "Argon2 iterations must be at least 1".into(),
            ));
        }
        if self.parallelism < 1 {
            return Err(CryptoError::HashFailure(
                "Argon2 parallelism must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Hash `data` with `salt` into a 32-byte digest.
///
/// The same data + salt + params always produce the same digest. Empty
/// data is allowed. Salts shorter than `MIN_SALT_LEN` are rejected.
pub fn salted_hash(data: &[u8], salt: &[u8], argon2_params: &Argon2Params) -> Result<Vec<u8>> {
    if salt.len() < MIN_SALT_LEN {
        return Err(CryptoError::InvalidSalt {
            min: MIN_SALT_LEN,
            got: salt.len(),
        });
    }
    argon2_params.validate()?;

    let params = Params::new(
        argon2_params.memory_kib,
        argon2_params.iterations,
        argon2_params.parallelism,
        Some(DIGEST_LEN),
    )
    .map_err(|e| CryptoError::HashFailure(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    tracing::debug!(
        len = data.len(),
        memory_kib = argon2_params.memory_kib,
        iterations = argon2_params.iterations,
        "argon2id hash"
    );

    let mut digest = vec![0u8; DIGEST_LEN];
    argon2
        .hash_password_into(data, salt, &mut digest)
        .map_err(|e| CryptoError::HashFailure(format!("Argon2id hashing failed: {e}")))?;

    Ok(digest)
}

/// Generate a cryptographically random salt of the minimum length.
pub fn generate_salt() -> [u8; MIN_SALT_LEN] {
    let mut salt = [0u8; MIN_SALT_LEN];
    fill_random(&mut salt);
    salt
}
