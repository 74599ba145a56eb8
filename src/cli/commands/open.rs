//! `cryptocore open`: reverse `cryptocore seal`.

use std::fs;
use std::io::Write;

use zeroize::Zeroizing;

use crate::cli::{load_settings, Cli};
use crate::crypto::rsa_aes::private_key_from_pem;
use crate::crypto::RsaAesCore;
use crate::envelope::{open_envelope, Splitter};
use crate::errors::Result;

/// Execute the `open` command.
pub fn execute(
    cli: &Cli,
    private_key_path: &str,
    envelope: &str,
    aad: Option<&str>,
    splitter: Option<&str>,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let splitter = match splitter {
        Some(value) => Splitter::new(value)?,
        None => settings.splitter()?,
    };

    let pem = Zeroizing::new(fs::read_to_string(private_key_path)?);
    let private_key = private_key_from_pem(&pem)?;

    let core = RsaAesCore::new(settings.argon2_params());
    let plaintext = Zeroizing::new(open_envelope(
        &core,
        &private_key,
        envelope,
        aad.map(str::as_bytes),
        &splitter,
    )?);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&plaintext)?;
    stdout.flush()?;
    Ok(())
}
