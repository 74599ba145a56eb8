//! Envelope packing.
//!
//! - `splitter`: raw `combine` / `find_splitter_index` / `split` and the
//!   validated `Splitter`
//! - `package`: the `Envelope` type with byte and transport encodings
//! - `hybrid`: session-key sealing on top of any `CryptoCore`

pub mod hybrid;
pub mod package;
pub mod splitter;

pub use hybrid::{open_envelope, seal_envelope};
pub use package::Envelope;
pub use splitter::{combine, find_splitter_index, split, Splitter, DEFAULT_SPLITTER};
