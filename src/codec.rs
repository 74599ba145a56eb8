//! Base64 helpers for making binary payloads transport-safe.
//!
//! - `encode_base64` uses the URL-safe alphabet without padding.
//! - `encode_base64_string` uses the standard RFC 4648 alphabet with padding.
//! - `decode_base64` accepts either alphabet, padded or not.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::errors::{CryptoError, Result};

/// Decoder config that tolerates both padded and unpadded input.
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Encode to URL-safe Base64 (`-`/`_`, no padding).
pub fn encode_base64(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Encode to standard Base64 (`+`/`/`, padded).
pub fn encode_base64_string(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode Base64 in either alphabet.
///
/// Input containing `-` or `_` is decoded with the URL-safe alphabet,
/// everything else with the standard one. Mixing both alphabets fails.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let engine = if data.contains(['-', '_']) {
        &URL_SAFE_LENIENT
    } else {
        &STANDARD_LENIENT
    };

    engine
        .decode(data)
        .map_err(|e| CryptoError::InvalidEncoding(format!("base64: {e}")))
}
