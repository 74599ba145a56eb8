use std::fmt;

use super::splitter::{combine, find_splitter_index, split, Splitter};
use crate::codec::{decode_base64, encode_base64};
use crate::errors::{CryptoError, Result};

/// An encrypted key and the data it protects.
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    pub encrypted_key: Vec<u8>,
    pub encrypted_data: Vec<u8>,
}

impl Envelope {
    pub fn new(encrypted_key: Vec<u8>, encrypted_data: Vec<u8>) -> Self {
        Self {
            encrypted_key,
            encrypted_data,
        }
    }

    /// Pack into `key || splitter || data`.
    ///
    /// Fails with `InvalidSplitter` when the splitter would be found inside
    /// the key (or straddling the boundary), since unpacking would then
    /// cut at the wrong place.
    pub fn to_bytes(&self, splitter: &Splitter) -> Result<Vec<u8>> {
        let combined = combine(&self.encrypted_data, &self.encrypted_key, splitter.as_str());
        let boundary = find_splitter_index(&combined, 0, splitter.as_str())?;
        if boundary != self.encrypted_key.len() {
            return Err(CryptoError::InvalidSplitter(format!(
                "'{splitter}' occurs inside the encrypted key at byte {boundary}"
            )));
        }
        Ok(combined)
    }

    /// Unpack a buffer produced by `to_bytes`.
    pub fn from_bytes(buffer: &[u8], splitter: &Splitter) -> Result<Self> {
        let (key, data) = split(buffer, splitter.as_str())?;
        Ok(Self::new(key.to_vec(), data.to_vec()))
    }

    /// Pack and encode as URL-safe Base64 for transport.
    pub fn to_transport(&self, splitter: &Splitter) -> Result<String> {
        Ok(encode_base64(&self.to_bytes(splitter)?))
    }

    /// Decode and unpack a transport string.
    pub fn from_transport(encoded: &str, splitter: &Splitter) -> Result<Self> {
        let buffer = decode_base64(encoded.trim())?;
        Self::from_bytes(&buffer, splitter)
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("encrypted_key_len", &self.encrypted_key.len())
            .field("encrypted_data_len", &self.encrypted_data.len())
            .finish()
    }
}
