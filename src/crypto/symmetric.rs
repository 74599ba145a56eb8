//! AES-GCM authenticated encryption with optional associated data.
//!
//! Keys are 16 bytes (AES-128) or 32 bytes (AES-256). IVs are always
//! 12 bytes.
//!
//! When the caller does not supply an IV, a fresh random one is generated
//! and prepended to the output:
//!   [ 12-byte IV | ciphertext + 16-byte auth tag ]
//!
//! With an explicit IV the output is only `ciphertext + tag`; the caller
//! keeps the IV. Never reuse an IV with the same key.

use std::fmt;

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::random::fill_random;
use crate::errors::{CryptoError, Result};

/// Size of the GCM IV in bytes.
pub const IV_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Default key size (AES-256).
pub const KEY_LEN: usize = 32;

/// Key sizes accepted by `SymmetricKey`.
const SUPPORTED_KEY_LENS: [usize; 2] = [16, 32];

/// An AES key that zeroes its memory when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: Vec<u8>,
}

impl SymmetricKey {
    /// Copy raw key bytes into a new key, rejecting unsupported sizes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !SUPPORTED_KEY_LENS.contains(&bytes.len()) {
            return Err(CryptoError::InvalidKey(format!(
                "AES key must be 16 or 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Generate a random 256-bit key.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; KEY_LEN];
        fill_random(&mut bytes);
        Self { bytes }
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey({} bytes, redacted)", self.bytes.len())
    }
}

/// Encrypt with a freshly generated IV, returning `iv || ciphertext`.
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    let mut iv = [0u8; IV_LEN];
    fill_random(&mut iv);

    let ciphertext = seal(key, &iv, plaintext, aad)?;

    // Prepend the IV so the caller only needs to store one blob.
    let mut output = Vec::with_capacity(IV_LEN + ciphertext.len());
    output.extend_from_slice(&iv);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Encrypt with a caller-supplied IV, returning `ciphertext` only.
pub fn encrypt_with_iv(
    key: &SymmetricKey,
    plaintext: &[u8],
    iv: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>> {
    check_iv(iv)?;
    seal(key, iv, plaintext, aad)
}

/// Decrypt data produced by `encrypt`.
///
/// Truncated input, a wrong key, a wrong AAD and tampering all fail
/// with the same `AuthenticationFailure`.
pub fn decrypt(key: &SymmetricKey, iv_and_ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    if iv_and_ciphertext.len() < IV_LEN + TAG_LEN {
        return Err(CryptoError::AuthenticationFailure);
    }

    let (iv, ciphertext) = iv_and_ciphertext.split_at(IV_LEN);
    open(key, iv, ciphertext, aad)
}

/// Decrypt data produced by `encrypt_with_iv` with the same IV.
pub fn decrypt_with_iv(
    key: &SymmetricKey,
    ciphertext: &[u8],
    iv: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>> {
    check_iv(iv)?;
    open(key, iv, ciphertext, aad)
}

fn check_iv(iv: &[u8]) -> Result<()> {
    if iv.len() != IV_LEN {
        return Err(CryptoError::InvalidIv {
            expected: IV_LEN,
            got: iv.len(),
        });
    }
    Ok(())
}

fn seal(key: &SymmetricKey, iv: &[u8], plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    let nonce = Nonce::from_slice(iv);
    let payload = Payload {
        msg: plaintext,
        aad: aad.unwrap_or_default(),
    };

    tracing::trace!(key_len = key.len(), len = plaintext.len(), "aes-gcm seal");

    let sealed = match key.len() {
        16 => Aes128Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| CryptoError::InvalidKey(format!("invalid key length: {e}")))?
            .encrypt(nonce, payload),
        32 => Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| CryptoError::InvalidKey(format!("invalid key length: {e}")))?
            .encrypt(nonce, payload),
        other => {
            return Err(CryptoError::InvalidKey(format!(
                "AES key must be 16 or 32 bytes, got {other}"
            )))
        }
    };

    sealed.map_err(|e| CryptoError::EncryptionFailure(format!("encryption error: {e}")))
}

fn open(key: &SymmetricKey, iv: &[u8], ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    let nonce = Nonce::from_slice(iv);
    let payload = Payload {
        msg: ciphertext,
        aad: aad.unwrap_or_default(),
    };

    tracing::trace!(key_len = key.len(), len = ciphertext.len(), "aes-gcm open");

    let opened = match key.len() {
        16 => Aes128Gcm::new_from_slice(key.as_bytes())
            .map_err(|_| CryptoError::AuthenticationFailure)?
            .decrypt(nonce, payload),
        32 => Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|_| CryptoError::AuthenticationFailure)?
            .decrypt(nonce, payload),
        _ => return Err(CryptoError::AuthenticationFailure),
    };

    opened.map_err(|_| CryptoError::AuthenticationFailure)
}
