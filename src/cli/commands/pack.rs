//! `cryptocore pack`: join an encrypted key and encrypted data.
//!
//! The key segment is stored as URL-safe Base64 text, the same layout
//! `seal` produces, so splitters accepted by `Splitter` cannot collide
//! with it.

use crate::cli::{resolve_splitter, Cli};
use crate::codec::{decode_base64, encode_base64};
use crate::envelope::Envelope;
use crate::errors::Result;

/// Execute the `pack` command.
pub fn execute(cli: &Cli, key: &str, data: &str, splitter: Option<&str>) -> Result<()> {
    let splitter = resolve_splitter(cli, splitter)?;

    let encrypted_key = decode_base64(key.trim())?;
    let encrypted_data = decode_base64(data.trim())?;

    let envelope = Envelope::new(encode_base64(&encrypted_key).into_bytes(), encrypted_data);
    println!("{}", envelope.to_transport(&splitter)?);
    Ok(())
}
