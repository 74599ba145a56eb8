//! AES-GCM + RSA adapter.
//!
//! - Symmetric: AES-GCM (see `symmetric`).
//! - Asymmetric encryption: RSA-OAEP with SHA-256.
//! - Signatures: RSA PKCS#1 v1.5 over a SHA-256 digest.
//! - Hash: Argon2id (see `hashing`).
//!
//! OAEP-SHA256 can encrypt at most `modulus_bytes - 66` bytes, so a
//! 2048-bit key accepts up to 190 bytes of plaintext. Larger payloads go
//! through the envelope: encrypt the data symmetrically and only the
//! session key with RSA.

use rand_core::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::crypto::contract::CryptoCore;
use crate::crypto::hashing::{salted_hash, Argon2Params};
use crate::crypto::random::random;
use crate::crypto::symmetric::{self, SymmetricKey};
use crate::errors::{CryptoError, Result};

/// Smallest modulus accepted for generation and import.
pub const MIN_RSA_BITS: usize = 2048;

/// OAEP padding overhead for SHA-256: `2 * hash_len + 2`.
const OAEP_SHA256_OVERHEAD: usize = 2 * 32 + 2;

/// An RSA key pair.
///
/// Deliberately not `Debug`: the private half would print its primes.
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaKeyPair {
    /// Generate a fresh key pair with a `bits`-bit modulus.
    pub fn generate(bits: usize) -> Result<Self> {
        if bits < MIN_RSA_BITS {
            return Err(CryptoError::InvalidKey(format!(
                "RSA modulus must be at least {MIN_RSA_BITS} bits, got {bits}"
            )));
        }

        tracing::debug!(bits, "generating RSA key pair");
        let private_key = RsaPrivateKey::new(&mut OsRng, bits)
            .map_err(|e| CryptoError::InvalidKey(format!("RSA key generation failed: {e}")))?;
        let public_key = private_key.to_public_key();

        Ok(Self {
            public_key,
            private_key,
        })
    }
}

/// Parse a DER-encoded SubjectPublicKeyInfo.
pub fn public_key_from_der(der: &[u8]) -> Result<RsaPublicKey> {
    let key = RsaPublicKey::from_public_key_der(der)
        .map_err(|e| CryptoError::InvalidKey(format!("RSA public key: {e}")))?;
    check_modulus(&key)?;
    Ok(key)
}

/// Parse a PEM-encoded SubjectPublicKeyInfo (`BEGIN PUBLIC KEY`).
pub fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey> {
    let key = RsaPublicKey::from_public_key_pem(pem)
        .map_err(|e| CryptoError::InvalidKey(format!("RSA public key: {e}")))?;
    check_modulus(&key)?;
    Ok(key)
}

/// Parse a DER-encoded PKCS#8 private key.
pub fn private_key_from_der(der: &[u8]) -> Result<RsaPrivateKey> {
    let key = RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| CryptoError::InvalidKey(format!("RSA private key: {e}")))?;
    check_modulus(&key)?;
    Ok(key)
}

/// Parse a PEM-encoded PKCS#8 private key (`BEGIN PRIVATE KEY`).
pub fn private_key_from_pem(pem: &str) -> Result<RsaPrivateKey> {
    let key = RsaPrivateKey::from_pkcs8_pem(pem)
        .map_err(|e| CryptoError::InvalidKey(format!("RSA private key: {e}")))?;
    check_modulus(&key)?;
    Ok(key)
}

/// Encode a public key as DER SubjectPublicKeyInfo.
pub fn public_key_to_der(key: &RsaPublicKey) -> Result<Vec<u8>> {
    key.to_public_key_der()
        .map(|doc| doc.as_bytes().to_vec())
        .map_err(|e| CryptoError::InvalidKey(format!("RSA public key encoding: {e}")))
}

/// Encode a public key as PEM SubjectPublicKeyInfo.
pub fn public_key_to_pem(key: &RsaPublicKey) -> Result<String> {
    key.to_public_key_pem(LineEnding::LF)
        .map_err(|e| CryptoError::InvalidKey(format!("RSA public key encoding: {e}")))
}

/// Encode a private key as PEM PKCS#8. The buffer is wiped on drop.
pub fn private_key_to_pem(key: &RsaPrivateKey) -> Result<Zeroizing<String>> {
    key.to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| CryptoError::InvalidKey(format!("RSA private key encoding: {e}")))
}

/// Largest plaintext OAEP-SHA256 accepts for this key.
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(OAEP_SHA256_OVERHEAD)
}

fn check_modulus<K: PublicKeyParts>(key: &K) -> Result<()> {
    let bits = key.size() * 8;
    if bits < MIN_RSA_BITS {
        return Err(CryptoError::InvalidKey(format!(
            "RSA modulus must be at least {MIN_RSA_BITS} bits, got {bits}"
        )));
    }
    Ok(())
}

/// Crypto core backed by AES-GCM, RSA and Argon2id.
#[derive(Debug, Clone, Default)]
pub struct RsaAesCore {
    argon2_params: Argon2Params,
}

impl RsaAesCore {
    /// Create a core that hashes with the given Argon2 parameters.
    pub fn new(argon2_params: Argon2Params) -> Self {
        Self { argon2_params }
    }
}

impl CryptoCore for RsaAesCore {
    type SymmetricKey = SymmetricKey;
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;
    type Signature = Vec<u8>;
    type Random = [u8; 32];

    fn symmetric_encrypt(
        &self,
        key: &SymmetricKey,
        data: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        symmetric::encrypt(key, data, aad)
    }

    fn symmetric_encrypt_with_iv(
        &self,
        key: &SymmetricKey,
        data: &[u8],
        iv: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        symmetric::encrypt_with_iv(key, data, iv, aad)
    }

    fn symmetric_decrypt(
        &self,
        key: &SymmetricKey,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        symmetric::decrypt(key, ciphertext, aad)
    }

    fn symmetric_decrypt_with_iv(
        &self,
        key: &SymmetricKey,
        ciphertext: &[u8],
        iv: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        symmetric::decrypt_with_iv(key, ciphertext, iv, aad)
    }

    fn asymmetric_encrypt(&self, public_key: &RsaPublicKey, data: &[u8]) -> Result<Vec<u8>> {
        check_modulus(public_key)?;
        let max = max_plaintext_len(public_key);
        if data.len() > max {
            return Err(CryptoError::PlaintextTooLarge {
                len: data.len(),
                max,
            });
        }

        tracing::debug!(len = data.len(), modulus_bytes = public_key.size(), "rsa-oaep encrypt");
        public_key
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), data)
            .map_err(|e| CryptoError::EncryptionFailure(format!("RSA-OAEP: {e}")))
    }

    fn asymmetric_decrypt(&self, private_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_modulus(private_key)?;

        tracing::debug!(len = ciphertext.len(), "rsa-oaep decrypt");
        private_key
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| CryptoError::DecryptionFailure)
    }

    fn hash(&self, data: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        salted_hash(data, salt, &self.argon2_params)
    }

    fn sign(&self, data: &[u8], private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
        let digest = Sha256::digest(data);
        private_key
            .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
            .map_err(|e| CryptoError::SigningFailure(format!("RSA PKCS#1 v1.5: {e}")))
    }

    fn verify_signature(
        &self,
        data: &[u8],
        signature: &Vec<u8>,
        public_key: &RsaPublicKey,
    ) -> Result<bool> {
        let digest = Sha256::digest(data);
        let verified = public_key
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
            .is_ok();
        tracing::debug!(verified, "rsa signature check");
        Ok(verified)
    }

    fn random(&self) -> [u8; 32] {
        random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_rejects_small_modulus() {
        assert!(matches!(
            RsaKeyPair::generate(1024),
            Err(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn garbage_der_is_invalid_key() {
        assert!(matches!(
            public_key_from_der(b"not a key"),
            Err(CryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            private_key_from_der(&[0x30, 0x03, 0x02, 0x01, 0x00]),
            Err(CryptoError::InvalidKey(_))
        ));
        assert!(public_key_from_pem("-----BEGIN PUBLIC KEY-----\n-----END PUBLIC KEY-----\n").is_err());
    }
}
