//! `cryptocore random`: print CSPRNG output.

use crate::codec::encode_base64;
use crate::crypto::random_bytes;
use crate::errors::{CryptoError, Result};

/// Upper bound on a single draw.
const MAX_BYTES: usize = 1024 * 1024;

/// Execute the `random` command.
pub fn execute(bytes: usize, hex: bool) -> Result<()> {
    if bytes == 0 || bytes > MAX_BYTES {
        return Err(CryptoError::CommandFailed(format!(
            "--bytes must be between 1 and {MAX_BYTES}, got {bytes}"
        )));
    }

    let buf = random_bytes(bytes);
    if hex {
        println!("{}", hex::encode(&buf));
    } else {
        println!("{}", encode_base64(&buf));
    }

    Ok(())
}
