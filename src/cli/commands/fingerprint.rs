//! `cryptocore fingerprint`: colon-separated SHA-256 of input.

use crate::cli::read_input;
use crate::errors::Result;
use crate::fingerprint::compute_fingerprint;

/// Execute the `fingerprint` command.
pub fn execute(input: Option<&str>, file: Option<&str>, metadata: Option<&str>) -> Result<()> {
    let data = read_input(input, file)?;
    println!("{}", compute_fingerprint(&data, metadata));
    Ok(())
}
