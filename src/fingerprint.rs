//! Key fingerprints.
//!
//! A fingerprint is `SHA-256(data || metadata)` rendered as lowercase hex
//! with a colon between every byte (`"ab:cd:ef"`). It is a stable,
//! non-secret identifier for key material. The keyed variant uses
//! HMAC-SHA256 when the identifier must not be computable by third parties.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::errors::{CryptoError, Result};

/// Compute the fingerprint of `data` plus optional `metadata`.
///
/// Empty metadata is treated exactly like no metadata.
pub fn compute_fingerprint(data: &[u8], metadata: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
        hasher.update(meta.as_bytes());
    }
    colonize(&hex::encode(hasher.finalize()))
}

/// Compute the fingerprint of a UTF-8 string (e.g. a PEM-encoded key).
pub fn compute_fingerprint_str(data: &str, metadata: Option<&str>) -> String {
    compute_fingerprint(data.as_bytes(), metadata)
}

/// Compute an HMAC-SHA256 keyed fingerprint.
///
/// Only holders of `mac_key` can reproduce or check the result.
pub fn compute_keyed_fingerprint(
    mac_key: &[u8],
    data: &[u8],
    metadata: Option<&str>,
) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(mac_key)
        .map_err(|e| CryptoError::InvalidKey(format!("HMAC init failed: {e}")))?;
    mac.update(data);
    if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
        mac.update(meta.as_bytes());
    }
    Ok(colonize(&hex::encode(mac.finalize().into_bytes())))
}

/// Compare two fingerprints in constant time.
pub fn fingerprints_match(expected: &str, actual: &str) -> bool {
    expected.as_bytes().ct_eq(actual.as_bytes()).into()
}

/// Insert a colon after every hex pair except the last.
fn colonize(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len() + hex.len() / 2);
    for (i, c) in hex.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(':');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_matches_sha256_of_nothing() {
        assert_eq!(
            compute_fingerprint(b"", None),
            "e3:b0:c4:42:98:fc:1c:14:9a:fb:f4:c8:99:6f:b9:24:\
             27:ae:41:e4:64:9b:93:4c:a4:95:99:1b:78:52:b8:55"
        );
    }

    #[test]
    fn known_answer_abc() {
        assert_eq!(
            compute_fingerprint(b"abc", None),
            "ba:78:16:bf:8f:01:cf:ea:41:41:40:de:5d:ae:22:23:\
             b0:03:61:a3:96:17:7a:9c:b4:10:ff:61:f2:00:15:ad"
        );
    }

    #[test]
    fn metadata_is_concatenated() {
        // "ab" + "c" hashes the same bytes as "abc".
        assert_eq!(
            compute_fingerprint(b"ab", Some("c")),
            compute_fingerprint(b"abc", None)
        );
    }

    #[test]
    fn empty_metadata_equals_no_metadata() {
        assert_eq!(
            compute_fingerprint(b"key", Some("")),
            compute_fingerprint(b"key", None)
        );
    }

    #[test]
    fn format_has_no_trailing_colon() {
        let fp = compute_fingerprint(b"anything", Some("meta"));
        assert_eq!(fp.len(), 32 * 3 - 1);
        assert!(!fp.ends_with(':'));
        assert!(fp
            .split(':')
            .all(|pair| pair.len() == 2 && pair.chars().all(|c| c.is_ascii_hexdigit())));
        assert_eq!(fp, fp.to_lowercase());
    }

    #[test]
    fn str_overload_matches_bytes() {
        assert_eq!(
            compute_fingerprint_str("-----BEGIN KEY-----", Some("v1")),
            compute_fingerprint(b"-----BEGIN KEY-----", Some("v1"))
        );
    }

    #[test]
    fn keyed_fingerprint_depends_on_key() {
        let a = compute_keyed_fingerprint(b"key-one", b"data", None).unwrap();
        let b = compute_keyed_fingerprint(b"key-two", b"data", None).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, compute_fingerprint(b"data", None));
    }

    #[test]
    fn fingerprints_match_is_exact() {
        let fp = compute_fingerprint(b"k", None);
        assert!(fingerprints_match(&fp, &fp));
        assert!(!fingerprints_match(&fp, &compute_fingerprint(b"j", None)));
        assert!(!fingerprints_match(&fp, &fp[..fp.len() - 1]));
    }
}
