//! `cryptocore decrypt`: reverse `cryptocore encrypt`.

use std::io::Write;

use zeroize::Zeroizing;

use crate::cli::{decode_optional, read_symmetric_key};
use crate::codec::decode_base64;
use crate::crypto::symmetric;
use crate::errors::Result;

/// Execute the `decrypt` command.
pub fn execute(ciphertext: &str, aad: Option<&str>, iv: Option<&str>) -> Result<()> {
    let key = read_symmetric_key()?;
    let ciphertext = decode_base64(ciphertext.trim())?;
    let aad = aad.map(str::as_bytes);

    let plaintext = Zeroizing::new(match decode_optional(iv)? {
        Some(iv) => symmetric::decrypt_with_iv(&key, &ciphertext, &iv, aad)?,
        None => symmetric::decrypt(&key, &ciphertext, aad)?,
    });

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&plaintext)?;
    stdout.flush()?;
    Ok(())
}
