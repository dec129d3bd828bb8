use thiserror::Error;

/// All errors that can occur in aes256.
#[derive(Debug, Error)]
pub enum Aes256Error {
    // --- Key derivation ---
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    // --- Cipher input errors ---
    #[error("Invalid IV length: expected 16 bytes, got {0}")]
    InvalidIvLength(usize),

    #[error("Invalid Base64 input: {0}")]
    InvalidEncoding(String),

    /// CBC with PKCS7 carries no authentication tag, so a wrong key, a
    /// wrong IV and a tampered ciphertext all surface as this one error.
    #[error("Decryption failed — bad padding (wrong key, wrong IV, or corrupted ciphertext)")]
    PaddingOrAuthenticity,

    #[error("Decrypted data is not valid UTF-8 text")]
    InvalidTextEncoding,

    // --- Authenticated mode ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong secret or tampered data")]
    DecryptionFailed,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for aes256 results.
pub type Result<T> = std::result::Result<T, Aes256Error>;
