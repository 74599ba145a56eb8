pub mod cli;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod envelope;
pub mod errors;
pub mod fingerprint;
