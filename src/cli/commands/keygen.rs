//! `cryptocore keygen`: write an RSA key pair as PKCS#8 PEM.
//!
//! Creates `private.pem` (owner-only on Unix) and `public.pem` in the
//! output directory.

use std::fs;
use std::path::Path;

use crate::cli::{load_settings, output, Cli};
use crate::crypto::rsa_aes::{private_key_to_pem, public_key_to_pem};
use crate::crypto::RsaKeyPair;
use crate::errors::{CryptoError, Result};
use crate::fingerprint::compute_fingerprint;

pub const PRIVATE_KEY_FILE: &str = "private.pem";
pub const PUBLIC_KEY_FILE: &str = "public.pem";

/// Execute the `keygen` command.
pub fn execute(cli: &Cli, out_dir: &str, bits: Option<usize>, force: bool) -> Result<()> {
    let bits = match bits {
        Some(bits) => bits,
        None => load_settings(cli)?.rsa_key_bits,
    };

    let dir = Path::new(out_dir);
    let private_path = dir.join(PRIVATE_KEY_FILE);
    let public_path = dir.join(PUBLIC_KEY_FILE);

    if private_path.exists() || public_path.exists() {
        if !force {
            return Err(CryptoError::CommandFailed(format!(
                "key files already exist in {} (use --force to overwrite)",
                dir.display()
            )));
        }
        output::warning(&format!("Overwriting key files in {}", dir.display()));
    }

    fs::create_dir_all(dir)?;

    output::info(&format!("Generating {bits}-bit RSA key pair..."));
    let pair = RsaKeyPair::generate(bits)?;
    let private_pem = private_key_to_pem(&pair.private_key)?;
    let public_pem = public_key_to_pem(&pair.public_key)?;

    fs::write(&private_path, private_pem.as_bytes())?;

    // On Unix, restrict the private key to owner-only read/write.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&private_path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            CryptoError::CommandFailed(format!("failed to set private key permissions: {e}"))
        })?;
    }

    fs::write(&public_path, public_pem.as_bytes())?;

    output::success(&format!(
        "Wrote {} and {}",
        private_path.display(),
        public_path.display()
    ));
    output::tip(&format!(
        "Public key fingerprint: {}",
        compute_fingerprint(public_pem.as_bytes(), None)
    ));

    Ok(())
}
