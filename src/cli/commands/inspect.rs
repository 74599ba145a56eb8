//! `cryptocore inspect`: summarize a transport envelope.

use crate::cli::output::{self, SegmentRow};
use crate::cli::{resolve_splitter, Cli};
use crate::envelope::Envelope;
use crate::errors::Result;
use crate::fingerprint::compute_fingerprint;

/// Execute the `inspect` command.
pub fn execute(cli: &Cli, envelope: &str, splitter: Option<&str>) -> Result<()> {
    let splitter = resolve_splitter(cli, splitter)?;
    let unpacked = Envelope::from_transport(envelope, &splitter)?;

    let rows = [
        SegmentRow {
            name: "encrypted key",
            len: unpacked.encrypted_key.len(),
            fingerprint: compute_fingerprint(&unpacked.encrypted_key, None),
        },
        SegmentRow {
            name: "encrypted data",
            len: unpacked.encrypted_data.len(),
            fingerprint: compute_fingerprint(&unpacked.encrypted_data, None),
        },
    ];

    output::info(&format!(
        "Envelope: {} bytes, splitter '{splitter}' ({} bytes)",
        unpacked.encrypted_key.len() + splitter.len() + unpacked.encrypted_data.len(),
        splitter.len()
    ));
    println!("{}", output::segments_table(&rows));

    Ok(())
}
