use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::hashing::Argon2Params;
use crate::crypto::rsa_aes::MIN_RSA_BITS;
use crate::envelope::{Splitter, DEFAULT_SPLITTER};
use crate::errors::{CryptoError, Result};

/// Tool configuration, loaded from `cryptocore.toml`.
///
/// Every field has a default so the CLI works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Delimiter between the encrypted key and the encrypted data.
    #[serde(default = "default_key_splitter")]
    pub key_splitter: String,

    /// Argon2 memory cost in KiB (default: 64 MB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count (default: 3).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree (default: 4).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,

    /// Modulus size for `keygen` (default: 2048).
    #[serde(default = "default_rsa_key_bits")]
    pub rsa_key_bits: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_key_splitter() -> String {
    DEFAULT_SPLITTER.to_string()
}

fn default_argon2_memory_kib() -> u32 {
    65_536 // 64 MB
}

fn default_argon2_iterations() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_rsa_key_bits() -> usize {
    2048
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_splitter: default_key_splitter(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
            rsa_key_bits: default_rsa_key_bits(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for.
    pub const FILE_NAME: &'static str = "cryptocore.toml";

    /// Load settings from `<dir>/cryptocore.toml`.
    ///
    /// A missing file yields defaults. A file that fails to parse, or that
    /// names an unusable splitter or key size, is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CryptoError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        self.splitter()
            .map_err(|e| CryptoError::ConfigError(format!("key_splitter: {e}")))?;
        self.argon2_params()
            .validate()
            .map_err(|e| CryptoError::ConfigError(format!("argon2: {e}")))?;
        if self.rsa_key_bits < MIN_RSA_BITS {
            return Err(CryptoError::ConfigError(format!(
                "rsa_key_bits must be at least {MIN_RSA_BITS}, got {}",
                self.rsa_key_bits
            )));
        }
        Ok(())
    }

    /// The configured splitter, validated.
    pub fn splitter(&self) -> Result<Splitter> {
        Splitter::new(self.key_splitter.as_str())
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> Argon2Params {
        Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
