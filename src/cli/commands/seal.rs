//! `cryptocore seal`: hybrid-encrypt for an RSA public key.

use std::fs;

use crate::cli::{load_settings, read_input, Cli};
use crate::crypto::rsa_aes::public_key_from_pem;
use crate::crypto::RsaAesCore;
use crate::envelope::{seal_envelope, Splitter};
use crate::errors::Result;

/// Execute the `seal` command.
pub fn execute(
    cli: &Cli,
    public_key_path: &str,
    input: Option<&str>,
    file: Option<&str>,
    aad: Option<&str>,
    splitter: Option<&str>,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let splitter = match splitter {
        Some(value) => Splitter::new(value)?,
        None => settings.splitter()?,
    };

    let public_key = public_key_from_pem(&fs::read_to_string(public_key_path)?)?;
    let plaintext = read_input(input, file)?;

    let core = RsaAesCore::new(settings.argon2_params());
    let sealed = seal_envelope(
        &core,
        &public_key,
        &plaintext,
        aad.map(str::as_bytes),
        &splitter,
    )?;

    println!("{sealed}");
    Ok(())
}
