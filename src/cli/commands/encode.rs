//! `cryptocore encode`: Base64-encode input.

use crate::cli::read_input;
use crate::codec::{encode_base64, encode_base64_string};
use crate::errors::Result;

/// Execute the `encode` command.
pub fn execute(input: Option<&str>, file: Option<&str>, standard: bool) -> Result<()> {
    let data = read_input(input, file)?;
    let encoded = if standard {
        encode_base64_string(&data)
    } else {
        encode_base64(&data)
    };
    println!("{encoded}");
    Ok(())
}
