//! Delimiter-based packing of an encrypted key and encrypted data.
//!
//! ```text
//! [encrypted key][splitter bytes][encrypted data]
//! ```
//!
//! There are no length prefixes. The boundary is the *first* occurrence
//! of the splitter, so the scheme is only unambiguous when the splitter
//! cannot occur inside the key prefix. `Splitter` enforces the usual way of
//! guaranteeing that: the key is Base64 text and the splitter contains at
//! least one byte outside every Base64 alphabet.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CryptoError, Result};

/// Splitter used when none is configured.
pub const DEFAULT_SPLITTER: &str = "#KEY_SPLITTER#";

/// Concatenate `encrypted_key || splitter || encrypted_data`.
///
/// No escaping is performed. The caller must make sure the splitter cannot
/// occur inside `encrypted_key`.
pub fn combine(encrypted_data: &[u8], encrypted_key: &[u8], splitter: &str) -> Vec<u8> {
    let splitter = splitter.as_bytes();
    let mut combined =
        Vec::with_capacity(encrypted_key.len() + splitter.len() + encrypted_data.len());
    combined.extend_from_slice(encrypted_key);
    combined.extend_from_slice(splitter);
    combined.extend_from_slice(encrypted_data);
    combined
}

/// Find where the splitter begins, scanning from `start`.
///
/// Only positions holding the splitter's first byte are compared in full.
/// The first full match wins; uniqueness is not checked. When the buffer
/// holds no match, this fails with `SplitterNotFound` instead of returning
/// a sentinel index.
pub fn find_splitter_index(buffer: &[u8], start: usize, splitter: &str) -> Result<usize> {
    let pattern = splitter.as_bytes();
    let Some(&first) = pattern.first() else {
        return Err(CryptoError::InvalidSplitter("splitter is empty".into()));
    };
    let Some(tail) = buffer.get(start..) else {
        return Err(CryptoError::SplitterNotFound);
    };

    for (offset, &byte) in tail.iter().enumerate() {
        if byte != first {
            continue;
        }
        let index = start + offset;
        if buffer[index..].starts_with(pattern) {
            return Ok(index);
        }
    }

    Err(CryptoError::SplitterNotFound)
}

/// Split a combined buffer into `(encrypted_key, encrypted_data)`.
pub fn split<'a>(buffer: &'a [u8], splitter: &str) -> Result<(&'a [u8], &'a [u8])> {
    let index = find_splitter_index(buffer, 0, splitter)?;
    Ok((&buffer[..index], &buffer[index + splitter.len()..]))
}

/// A splitter that can never occur inside Base64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter(String);

impl Splitter {
    /// Validate a splitter string.
    ///
    /// It must be non-empty and contain at least one byte that is not part
    /// of the standard or URL-safe Base64 alphabets (padding included).
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(CryptoError::InvalidSplitter("splitter is empty".into()));
        }
        if value.bytes().all(is_base64_byte) {
            return Err(CryptoError::InvalidSplitter(format!(
                "'{value}' uses only Base64 characters and could occur inside an encoded key"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: empty splitters are rejected by `new`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self(DEFAULT_SPLITTER.to_string())
    }
}

impl FromStr for Splitter {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'-' | b'_' | b'=')
}
