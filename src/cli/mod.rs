//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::codec::decode_base64;
use crate::config::Settings;
use crate::crypto::SymmetricKey;
use crate::envelope::Splitter;
use crate::errors::{CryptoError, Result};

/// Environment variable holding the Base64 symmetric key.
pub const KEY_ENV_VAR: &str = "CRYPTOCORE_KEY";

/// cryptocore CLI: envelope encryption and encoding toolkit.
#[derive(Parser)]
#[command(
    name = "cryptocore",
    about = "Envelope encryption, signing and encoding toolkit",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing cryptocore.toml (default: current directory)
    #[arg(long, global = true, env = "CRYPTOCORE_CONFIG_DIR")]
    pub config_dir: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Print random bytes from the OS CSPRNG
    Random {
        /// Number of bytes (default: 32)
        #[arg(short, long, default_value = "32")]
        bytes: usize,
        /// Print hex instead of URL-safe Base64
        #[arg(long)]
        hex: bool,
    },

    /// Base64-encode text, a file, or stdin
    Encode {
        /// Text to encode (reads --file or stdin if omitted)
        input: Option<String>,
        /// Read input from a file
        #[arg(short, long)]
        file: Option<String>,
        /// Use the standard padded alphabet instead of URL-safe
        #[arg(long)]
        standard: bool,
    },

    /// Decode Base64 (either alphabet) to raw bytes
    Decode {
        /// Base64 text
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Print hex instead of raw bytes
        #[arg(long)]
        hex: bool,
    },

    /// Print the SHA-256 fingerprint of text, a file, or stdin
    Fingerprint {
        /// Text to fingerprint (reads --file or stdin if omitted)
        input: Option<String>,
        /// Read input from a file
        #[arg(short, long)]
        file: Option<String>,
        /// Metadata appended to the input before hashing
        #[arg(short, long)]
        metadata: Option<String>,
    },

    /// Encrypt with AES-GCM using the key from CRYPTOCORE_KEY
    Encrypt {
        /// Plaintext (reads --file or stdin if omitted)
        input: Option<String>,
        /// Read plaintext from a file
        #[arg(short, long)]
        file: Option<String>,
        /// Associated data bound to the ciphertext
        #[arg(long)]
        aad: Option<String>,
        /// Explicit 12-byte IV in Base64 (output then omits the IV)
        #[arg(long)]
        iv: Option<String>,
    },

    /// Decrypt output of `encrypt`
    Decrypt {
        /// Ciphertext in Base64
        #[arg(allow_hyphen_values = true)]
        ciphertext: String,
        /// Associated data used at encryption time
        #[arg(long)]
        aad: Option<String>,
        /// The IV, when `encrypt --iv` was used
        #[arg(long)]
        iv: Option<String>,
    },

    /// Generate an RSA key pair (PKCS#8 PEM)
    Keygen {
        /// Output directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        out_dir: String,
        /// Modulus size (default: rsa_key_bits from config)
        #[arg(long)]
        bits: Option<usize>,
        /// Overwrite existing key files
        #[arg(long)]
        force: bool,
    },

    /// Encrypt data for an RSA public key as a transport envelope
    Seal {
        /// Path to the recipient's public key (PEM)
        #[arg(short = 'k', long)]
        public_key: String,
        /// Plaintext (reads --file or stdin if omitted)
        input: Option<String>,
        /// Read plaintext from a file
        #[arg(short, long)]
        file: Option<String>,
        /// Associated data bound to the payload
        #[arg(long)]
        aad: Option<String>,
        /// Override the configured key splitter
        #[arg(long)]
        splitter: Option<String>,
    },

    /// Open an envelope produced by `seal`
    Open {
        /// Path to the private key (PEM)
        #[arg(short = 'k', long)]
        private_key: String,
        /// Transport envelope
        #[arg(allow_hyphen_values = true)]
        envelope: String,
        /// Associated data used at sealing time
        #[arg(long)]
        aad: Option<String>,
        /// Override the configured key splitter
        #[arg(long)]
        splitter: Option<String>,
    },

    /// Pack an encrypted key and encrypted data into a transport envelope
    Pack {
        /// Encrypted key in Base64
        #[arg(long, allow_hyphen_values = true)]
        key: String,
        /// Encrypted data in Base64
        #[arg(long, allow_hyphen_values = true)]
        data: String,
        /// Override the configured key splitter
        #[arg(long)]
        splitter: Option<String>,
    },

    /// Split a transport envelope into its key and data segments
    Unpack {
        /// Transport envelope
        #[arg(allow_hyphen_values = true)]
        envelope: String,
        /// Print JSON instead of two lines
        #[arg(long)]
        json: bool,
        /// Override the configured key splitter
        #[arg(long)]
        splitter: Option<String>,
    },

    /// Show segment sizes and fingerprints of a transport envelope
    Inspect {
        /// Transport envelope
        #[arg(allow_hyphen_values = true)]
        envelope: String,
        /// Override the configured key splitter
        #[arg(long)]
        splitter: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from `--config-dir`, or the current directory.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let dir = match &cli.config_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    Settings::load(&dir)
}

/// Pick the splitter: the command-line override wins over the config file.
pub fn resolve_splitter(cli: &Cli, override_value: Option<&str>) -> Result<Splitter> {
    match override_value {
        Some(value) => Splitter::new(value),
        None => load_settings(cli)?.splitter(),
    }
}

/// Get the symmetric key, trying in order:
/// 1. `CRYPTOCORE_KEY` env var (Base64)
/// 2. Interactive hidden prompt
pub fn read_symmetric_key() -> Result<SymmetricKey> {
    let encoded = match std::env::var(KEY_ENV_VAR) {
        Ok(value) if !value.is_empty() => Zeroizing::new(value),
        _ => {
            let value = dialoguer::Password::new()
                .with_prompt("Enter symmetric key (Base64)")
                .interact()
                .map_err(|e| CryptoError::CommandFailed(format!("key prompt: {e}")))?;
            Zeroizing::new(value)
        }
    };

    let bytes = Zeroizing::new(decode_base64(encoded.trim())?);
    SymmetricKey::from_bytes(&bytes)
}

/// Collect command input from the positional argument, `--file`, or stdin.
pub fn read_input(inline: Option<&str>, file: Option<&str>) -> Result<Vec<u8>> {
    match (inline, file) {
        (Some(_), Some(_)) => Err(CryptoError::CommandFailed(
            "pass either an input argument or --file, not both".into(),
        )),
        (Some(text), None) => Ok(text.as_bytes().to_vec()),
        (None, Some(path)) => Ok(std::fs::read(path)?),
        (None, None) => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode an optional Base64 argument.
pub fn decode_optional(value: Option<&str>) -> Result<Option<Vec<u8>>> {
    value.map(|v| decode_base64(v.trim())).transpose()
}
