//! AES-GCM + elliptic-curve adapter.
//!
//! - Symmetric: AES-GCM (see `symmetric`).
//! - Asymmetric encryption: an X25519 sealed box. A fresh ephemeral key
//!   agrees a secret with the recipient's static X25519 key, HKDF-SHA256
//!   turns it into an AES-256 key, and the payload is sealed with
//!   AES-GCM using the ephemeral public key as AAD.
//! - Signatures: Ed25519.
//! - Hash: Argon2id (see `hashing`).
//!
//! Sealed box layout:
//!   [ 32-byte ephemeral public key | 12-byte IV | ciphertext + 16-byte tag ]

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use hkdf::Hkdf;
use rand_core::OsRng;
use sha2::Sha256;
use x25519_dalek::{EphemeralSecret, PublicKey as AgreementPublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::crypto::contract::CryptoCore;
use crate::crypto::hashing::{salted_hash, Argon2Params};
use crate::crypto::random::random;
use crate::crypto::symmetric::{self, SymmetricKey, IV_LEN, KEY_LEN, TAG_LEN};
use crate::errors::{CryptoError, Result};

/// Length of every raw key half in bytes.
pub const EC_KEY_LEN: usize = 32;

/// HKDF `info` binding derived keys to this construction.
const SEALED_BOX_INFO: &[u8] = b"cryptocore-sealed-box-v1";

/// Public half: Ed25519 verifying key plus X25519 agreement key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPublicKey {
    verifying: VerifyingKey,
    agreement: AgreementPublicKey,
}

impl EcPublicKey {
    /// Build from raw 32-byte halves. Invalid curve points are rejected.
    pub fn from_bytes(verifying: &[u8], agreement: &[u8]) -> Result<Self> {
        let verifying = VerifyingKey::from_bytes(&to_array(verifying, "Ed25519 public key")?)
            .map_err(|e| CryptoError::InvalidKey(format!("Ed25519 public key: {e}")))?;
        let agreement = AgreementPublicKey::from(to_array(agreement, "X25519 public key")?);
        Ok(Self {
            verifying,
            agreement,
        })
    }

    /// Raw Ed25519 verifying key.
    pub fn verifying_key_bytes(&self) -> [u8; EC_KEY_LEN] {
        self.verifying.to_bytes()
    }

    /// Raw X25519 public key.
    pub fn agreement_key_bytes(&self) -> [u8; EC_KEY_LEN] {
        self.agreement.to_bytes()
    }
}

/// Private half: Ed25519 signing key plus X25519 static secret.
///
/// Both halves zero their memory on drop.
pub struct EcPrivateKey {
    signing: SigningKey,
    agreement: StaticSecret,
}

impl EcPrivateKey {
    /// Build from a raw Ed25519 seed and a raw X25519 secret.
    pub fn from_bytes(signing_seed: &[u8], agreement_secret: &[u8]) -> Result<Self> {
        let seed = Zeroizing::new(to_array(signing_seed, "Ed25519 seed")?);
        let secret = Zeroizing::new(to_array(agreement_secret, "X25519 secret")?);
        Ok(Self {
            signing: SigningKey::from_bytes(&seed),
            agreement: StaticSecret::from(*secret),
        })
    }

    /// Raw Ed25519 seed, wiped on drop.
    pub fn signing_seed(&self) -> Zeroizing<[u8; EC_KEY_LEN]> {
        Zeroizing::new(self.signing.to_bytes())
    }

    /// Raw X25519 secret, wiped on drop.
    pub fn agreement_secret(&self) -> Zeroizing<[u8; EC_KEY_LEN]> {
        Zeroizing::new(self.agreement.to_bytes())
    }

    /// Derive the matching public key.
    pub fn public_key(&self) -> EcPublicKey {
        EcPublicKey {
            verifying: self.signing.verifying_key(),
            agreement: AgreementPublicKey::from(&self.agreement),
        }
    }
}

/// A freshly generated EC key pair.
pub struct EcKeyPair {
    pub public_key: EcPublicKey,
    pub private_key: EcPrivateKey,
}

impl EcKeyPair {
    /// Generate both halves from the OS CSPRNG.
    pub fn generate() -> Self {
        let private_key = EcPrivateKey {
            signing: SigningKey::generate(&mut OsRng),
            agreement: StaticSecret::random_from_rng(OsRng),
        };
        Self {
            public_key: private_key.public_key(),
            private_key,
        }
    }
}

fn to_array(bytes: &[u8], what: &str) -> Result<[u8; EC_KEY_LEN]> {
    bytes.try_into().map_err(|_| {
        CryptoError::InvalidKey(format!(
            "{what} must be {EC_KEY_LEN} bytes, got {}",
            bytes.len()
        ))
    })
}

/// Derive the sealed-box AES key from the shared secret.
///
/// Both public keys go into the HKDF salt so the key is bound to this
/// exact (ephemeral, recipient) pair.
fn derive_box_key(
    shared_secret: &[u8],
    ephemeral_public: &[u8; EC_KEY_LEN],
    recipient_public: &[u8; EC_KEY_LEN],
) -> Result<SymmetricKey> {
    let mut salt = [0u8; 2 * EC_KEY_LEN];
    salt[..EC_KEY_LEN].copy_from_slice(ephemeral_public);
    salt[EC_KEY_LEN..].copy_from_slice(recipient_public);

    let hk = Hkdf::<Sha256>::new(Some(&salt[..]), shared_secret);
    let mut okm = Zeroizing::new([0u8; KEY_LEN]);
    hk.expand(SEALED_BOX_INFO, &mut okm[..])
        .map_err(|e| CryptoError::EncryptionFailure(format!("HKDF expand failed: {e}")))?;

    SymmetricKey::from_bytes(&okm[..])
}

/// Crypto core backed by AES-GCM, X25519, Ed25519 and Argon2id.
#[derive(Debug, Clone, Default)]
pub struct EdAesCore {
    argon2_params: Argon2Params,
}

impl EdAesCore {
    /// Create a core that hashes with the given Argon2 parameters.
    pub fn new(argon2_params: Argon2Params) -> Self {
        Self { argon2_params }
    }
}

impl CryptoCore for EdAesCore {
    type SymmetricKey = SymmetricKey;
    type PublicKey = EcPublicKey;
    type PrivateKey = EcPrivateKey;
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

    fn asymmetric_encrypt(&self, public_key: &EcPublicKey, data: &[u8]) -> Result<Vec<u8>> {
        let ephemeral = EphemeralSecret::random_from_rng(OsRng);
        let ephemeral_public = AgreementPublicKey::from(&ephemeral);

        let shared = ephemeral.diffie_hellman(&public_key.agreement);
        if !shared.was_contributory() {
            return Err(CryptoError::InvalidKey(
                "X25519 public key has low order".into(),
            ));
        }

        let key = derive_box_key(
            shared.as_bytes(),
            ephemeral_public.as_bytes(),
            public_key.agreement.as_bytes(),
        )?;
        let sealed = symmetric::encrypt(&key, data, Some(ephemeral_public.as_bytes().as_slice()))?;

        tracing::debug!(len = data.len(), "x25519 sealed box encrypt");

        let mut output = Vec::with_capacity(EC_KEY_LEN + sealed.len());
        output.extend_from_slice(ephemeral_public.as_bytes());
        output.extend_from_slice(&sealed);
        Ok(output)
    }

    fn asymmetric_decrypt(&self, private_key: &EcPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < EC_KEY_LEN + IV_LEN + TAG_LEN {
            return Err(CryptoError::DecryptionFailure);
        }

        let (ephemeral_bytes, sealed) = ciphertext.split_at(EC_KEY_LEN);
        let ephemeral_public = AgreementPublicKey::from(to_array(ephemeral_bytes, "ephemeral key")?);

        let shared = private_key.agreement.diffie_hellman(&ephemeral_public);
        if !shared.was_contributory() {
            return Err(CryptoError::DecryptionFailure);
        }

        let recipient_public = AgreementPublicKey::from(&private_key.agreement);
        let key = derive_box_key(
            shared.as_bytes(),
            ephemeral_public.as_bytes(),
            recipient_public.as_bytes(),
        )
        .map_err(|_| CryptoError::DecryptionFailure)?;

        tracing::debug!(len = ciphertext.len(), "x25519 sealed box decrypt");

        symmetric::decrypt(&key, sealed, Some(ephemeral_public.as_bytes().as_slice()))
            .map_err(|_| CryptoError::DecryptionFailure)
    }

    fn hash(&self, data: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        salted_hash(data, salt, &self.argon2_params)
    }

    fn sign(&self, data: &[u8], private_key: &EcPrivateKey) -> Result<Vec<u8>> {
        Ok(private_key.signing.sign(data).to_bytes().to_vec())
    }

    fn verify_signature(
        &self,
        data: &[u8],
        signature: &Vec<u8>,
        public_key: &EcPublicKey,
    ) -> Result<bool> {
        // A signature of the wrong length can never verify.
        let Ok(signature) = Signature::from_slice(signature) else {
            return Ok(false);
        };
        let verified = public_key.verifying.verify_strict(data, &signature).is_ok();
        tracing::debug!(verified, "ed25519 signature check");
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
    fn private_key_bytes_roundtrip_to_same_public_key() {
        let seed = [3u8; 32];
        let secret = [9u8; 32];
        let a = EcPrivateKey::from_bytes(&seed, &secret).unwrap();
        let b = EcPrivateKey::from_bytes(&seed, &secret).unwrap();
        assert_eq!(a.public_key(), b.public_key());

        let public = a.public_key();
        let rebuilt =
            EcPublicKey::from_bytes(&public.verifying_key_bytes(), &public.agreement_key_bytes())
                .unwrap();
        assert_eq!(rebuilt, public);

        assert_eq!(*a.signing_seed(), seed);
        assert_eq!(*a.agreement_secret(), secret);
    }

    #[test]
    fn wrong_length_halves_are_invalid_key() {
        assert!(matches!(
            EcPrivateKey::from_bytes(&[0u8; 31], &[0u8; 32]),
            Err(CryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            EcPublicKey::from_bytes(&[0u8; 32], &[0u8; 33]),
            Err(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn low_order_recipient_is_rejected() {
        let core = EdAesCore::default();
        let pair = EcKeyPair::generate();
        // The all-zero X25519 point has low order.
        let weak =
            EcPublicKey::from_bytes(&pair.public_key.verifying_key_bytes(), &[0u8; 32]).unwrap();
        assert!(matches!(
            core.asymmetric_encrypt(&weak, b"data"),
            Err(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn sealed_box_layout() {
        let core = EdAesCore::default();
        let pair = EcKeyPair::generate();
        let sealed = core.asymmetric_encrypt(&pair.public_key, b"hello").unwrap();
        assert_eq!(sealed.len(), EC_KEY_LEN + IV_LEN + 5 + TAG_LEN);
    }

    #[test]
    fn short_signature_is_false_not_error() {
        let core = EdAesCore::default();
        let pair = EcKeyPair::generate();
        let ok = core
            .verify_signature(b"data", &vec![0u8; 10], &pair.public_key)
            .unwrap();
        assert!(!ok);
    }
}
