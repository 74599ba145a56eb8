//! `cryptocore encrypt`: AES-GCM with the key from `CRYPTOCORE_KEY`.
//!
//! Without `--iv` the output is `Base64url(iv || ciphertext || tag)`.
//! With `--iv` the IV is not included and must be passed to `decrypt`.

use crate::cli::{decode_optional, read_input, read_symmetric_key};
use crate::codec::encode_base64;
use crate::crypto::symmetric;
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(
    input: Option<&str>,
    file: Option<&str>,
    aad: Option<&str>,
    iv: Option<&str>,
) -> Result<()> {
    let key = read_symmetric_key()?;
    let plaintext = read_input(input, file)?;
    let aad = aad.map(str::as_bytes);

    let ciphertext = match decode_optional(iv)? {
        Some(iv) => symmetric::encrypt_with_iv(&key, &plaintext, &iv, aad)?,
        None => symmetric::encrypt(&key, &plaintext, aad)?,
    };

    println!("{}", encode_base64(&ciphertext));
    Ok(())
}
