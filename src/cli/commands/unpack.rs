//! `cryptocore unpack`: split a transport envelope.

use serde::Serialize;

use crate::cli::{resolve_splitter, Cli};
use crate::codec::encode_base64;
use crate::envelope::{Envelope, Splitter};
use crate::errors::{CryptoError, Result};

/// JSON shape printed by `unpack --json`.
#[derive(Debug, Serialize)]
pub struct UnpackedEnvelope {
    pub encrypted_key: String,
    pub encrypted_data: String,
    pub splitter: String,
}

/// Execute the `unpack` command.
pub fn execute(cli: &Cli, envelope: &str, json: bool, splitter: Option<&str>) -> Result<()> {
    let splitter = resolve_splitter(cli, splitter)?;
    let unpacked = unpack(envelope, &splitter)?;

    if json {
        let rendered = serde_json::to_string_pretty(&unpacked)
            .map_err(|e| CryptoError::CommandFailed(format!("JSON serialization: {e}")))?;
        println!("{rendered}");
    } else {
        println!("{}", unpacked.encrypted_key);
        println!("{}", unpacked.encrypted_data);
    }

    Ok(())
}

/// Decode a transport string into printable Base64 segments.
pub fn unpack(transport: &str, splitter: &Splitter) -> Result<UnpackedEnvelope> {
    let envelope = Envelope::from_transport(transport, splitter)?;

    let encrypted_key = String::from_utf8(envelope.encrypted_key).map_err(|_| {
        CryptoError::InvalidEncoding("encrypted key segment is not Base64 text".into())
    })?;

    Ok(UnpackedEnvelope {
        encrypted_key,
        encrypted_data: encode_base64(&envelope.encrypted_data),
        splitter: splitter.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::DEFAULT_SPLITTER;

    #[test]
    fn unpack_returns_base64_segments() {
        let splitter = Splitter::default();
        let transport = Envelope::new(b"a2V5".to_vec(), vec![1, 2, 3])
            .to_transport(&splitter)
            .unwrap();

        let unpacked = unpack(&transport, &splitter).unwrap();
        assert_eq!(unpacked.encrypted_key, "a2V5");
        assert_eq!(unpacked.encrypted_data, "AQID");
        assert_eq!(unpacked.splitter, DEFAULT_SPLITTER);
    }

    #[test]
    fn json_has_all_fields() {
        let unpacked = UnpackedEnvelope {
            encrypted_key: "a2V5".into(),
            encrypted_data: "AQID".into(),
            splitter: "|".into(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&unpacked).unwrap()).unwrap();
        assert_eq!(value["encrypted_key"], "a2V5");
        assert_eq!(value["encrypted_data"], "AQID");
        assert_eq!(value["splitter"], "|");
    }
}
