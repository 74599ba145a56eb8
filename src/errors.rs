use thiserror::Error;

/// All errors that can occur in cryptocore.
#[derive(Debug, Error)]
pub enum CryptoError {
    // --- Key and parameter errors ---
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid IV: expected {expected} bytes, got {got}")]
    InvalidIv { expected: usize, got: usize },

    #[error("Invalid salt: at least {min} bytes required, got {got}")]
    InvalidSalt { min: usize, got: usize },

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    // --- Cipher errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailure(String),

    #[error("Decryption failed")]
    DecryptionFailure,

    #[error("Authentication failed: wrong key, wrong AAD or tampered data")]
    AuthenticationFailure,

    #[error("Plaintext too large: {len} bytes exceeds the {max}-byte limit for this key")]
    PlaintextTooLarge { len: usize, max: usize },

    #[error("Signing failed: {0}")]
    SigningFailure(String),

    #[error("Hashing failed: {0}")]
    HashFailure(String),

    // --- Envelope errors ---
    #[error("Key splitter not found in envelope")]
    SplitterNotFound,

    #[error("Invalid key splitter: {0}")]
    InvalidSplitter(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for cryptocore results.
pub type Result<T> = std::result::Result<T, CryptoError>;
