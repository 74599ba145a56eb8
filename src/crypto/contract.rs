//! The crypto core contract.
//!
//! `CryptoCore` groups every operation a caller needs: symmetric AEAD
//! (with and without an explicit IV), asymmetric encryption, salted
//! hashing, signatures and secure random generation. Each adapter picks a
//! primitive family and fixes the associated key and signature types.
//!
//! All calls are self-contained: adapters hold only immutable
//! configuration, build a fresh cipher context per call and keep no
//! reference to caller key material after returning.

use crate::errors::Result;

/// Core cryptographic operations over one primitive family.
pub trait CryptoCore: Send + Sync {
    /// Secret key for the symmetric AEAD.
    type SymmetricKey;
    /// Shareable half of the asymmetric key pair.
    type PublicKey;
    /// Secret half of the asymmetric key pair.
    type PrivateKey;
    /// Detached signature produced by `sign`.
    type Signature;
    /// Value produced by `random`.
    type Random;

    /// Encrypt with an internally generated IV that `symmetric_decrypt`
    /// recovers from the output.
    fn symmetric_encrypt(
        &self,
        key: &Self::SymmetricKey,
        data: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    /// Encrypt with a caller-supplied IV. The caller must never reuse a
    /// (key, IV) pair; this is not detected.
    fn symmetric_encrypt_with_iv(
        &self,
        key: &Self::SymmetricKey,
        data: &[u8],
        iv: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    /// Decrypt output of `symmetric_encrypt`. Any tag mismatch is a single
    /// opaque `AuthenticationFailure`.
    fn symmetric_decrypt(
        &self,
        key: &Self::SymmetricKey,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    /// Decrypt output of `symmetric_encrypt_with_iv`.
    fn symmetric_decrypt_with_iv(
        &self,
        key: &Self::SymmetricKey,
        ciphertext: &[u8],
        iv: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    /// Encrypt `data` to the holder of `public_key`.
    fn asymmetric_encrypt(&self, public_key: &Self::PublicKey, data: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt output of `asymmetric_encrypt`.
    fn asymmetric_decrypt(&self, private_key: &Self::PrivateKey, ciphertext: &[u8])
        -> Result<Vec<u8>>;

    /// Deterministic salted hash. Salt must be at least 32 bytes.
    fn hash(&self, data: &[u8], salt: &[u8]) -> Result<Vec<u8>>;

    /// Sign `data` with `private_key`.
    fn sign(&self, data: &[u8], private_key: &Self::PrivateKey) -> Result<Self::Signature>;

    /// Check `signature` over `data`. A mismatch is `Ok(false)`, not an error.
    fn verify_signature(
        &self,
        data: &[u8],
        signature: &Self::Signature,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;

    /// Draw a value from a CSPRNG.
    fn random(&self) -> Self::Random;
}
