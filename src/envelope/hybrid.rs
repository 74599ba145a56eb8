//! Hybrid encryption on top of any `CryptoCore`.
//!
//! A fresh 256-bit session key encrypts the payload symmetrically. The
//! session key is encrypted to the recipient and Base64url-encoded, which
//! keeps every splitter accepted by `Splitter` out of the key segment. The
//! two parts are then packed and encoded for transport.

use zeroize::Zeroizing;

use super::package::Envelope;
use super::splitter::Splitter;
use crate::codec::{decode_base64, encode_base64};
use crate::crypto::contract::CryptoCore;
use crate::crypto::symmetric::SymmetricKey;
use crate::errors::{CryptoError, Result};

/// Encrypt `data` for the holder of `public_key`.
pub fn seal_envelope<C>(
    core: &C,
    public_key: &C::PublicKey,
    data: &[u8],
    aad: Option<&[u8]>,
    splitter: &Splitter,
) -> Result<String>
where
    C: CryptoCore<SymmetricKey = SymmetricKey>,
{
    let session_key = SymmetricKey::generate();
    let encrypted_data = core.symmetric_encrypt(&session_key, data, aad)?;
    let encrypted_key = core.asymmetric_encrypt(public_key, session_key.as_bytes())?;

    tracing::debug!(
        data_len = data.len(),
        key_len = encrypted_key.len(),
        "sealed envelope"
    );

    let envelope = Envelope::new(encode_base64(&encrypted_key).into_bytes(), encrypted_data);
    envelope.to_transport(splitter)
}

/// Reverse `seal_envelope`.
///
/// A session key of unexpected length after decryption means the envelope
/// was not sealed for this key and is reported as `DecryptionFailure`.
pub fn open_envelope<C>(
    core: &C,
    private_key: &C::PrivateKey,
    transport: &str,
    aad: Option<&[u8]>,
    splitter: &Splitter,
) -> Result<Vec<u8>>
where
    C: CryptoCore<SymmetricKey = SymmetricKey>,
{
    let envelope = Envelope::from_transport(transport, splitter)?;
    let key_text = std::str::from_utf8(&envelope.encrypted_key).map_err(|_| {
        CryptoError::InvalidEncoding("encrypted key segment is not Base64 text".into())
    })?;
    let encrypted_key = decode_base64(key_text)?;

    let key_bytes = Zeroizing::new(core.asymmetric_decrypt(private_key, &encrypted_key)?);
    let session_key =
        SymmetricKey::from_bytes(&key_bytes).map_err(|_| CryptoError::DecryptionFailure)?;

    tracing::debug!(data_len = envelope.encrypted_data.len(), "opening envelope");
    core.symmetric_decrypt(&session_key, &envelope.encrypted_data, aad)
}
