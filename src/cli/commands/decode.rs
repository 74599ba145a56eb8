//! `cryptocore decode`: decode Base64 in either alphabet.

use std::io::Write;

use crate::codec::decode_base64;
use crate::errors::Result;

/// Execute the `decode` command.
///
/// Raw bytes go to stdout unchanged, without a trailing newline.
pub fn execute(input: &str, hex: bool) -> Result<()> {
    let data = decode_base64(input.trim())?;

    if hex {
        println!("{}", hex::encode(&data));
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&data)?;
        stdout.flush()?;
    }

    Ok(())
}
