//! Cryptographic primitives for aes256.
//!
//! This module provides:
//! - AES-256-CBC text encryption and decryption (`encryption`)
//! - PBKDF2-HMAC-SHA256 key derivation (`kdf`)
//! - Secure key and IV generation (`keys`)
//! - Base64/hex transport encodings (`encoding`)
//! - Opt-in AES-256-GCM authenticated encryption (`sealed`)

pub mod encoding;
pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod sealed;

use serde::Serialize;

// Re-export the most commonly used items so callers can write:
//   use aes256::crypto::{encrypt, decrypt, generate_secure_key, ...};
pub use encoding::Base64Layout;
pub use encryption::{
    decrypt, decrypt_bytes, encrypt, encrypt_bytes, encrypt_with_layout, IV_LEN,
};
pub use kdf::{derive_pbkdf2, PBKDF2_ITERATIONS, PBKDF2_SALT, PBKDF2_SALT_STR};
pub use keys::{
    generate_secure_iv, generate_secure_iv_with_rng, generate_secure_key,
    generate_secure_key_with_rng,
};
pub use sealed::{open, seal, seal_with};

/// The fixed algorithm parameters of the compatible CBC surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
    pub transformation: &'static str,
    pub kdf: &'static str,
    pub iterations: u32,
    pub key_bits: u32,
    pub iv_bytes: usize,
    pub salt: &'static str,
    pub secure_key_bits: u32,
    pub secure_iv_bits: u32,
}

impl Params {
    /// Parameters every encrypt/decrypt call uses.
    pub fn compatible() -> Self {
        Self {
            transformation: "AES/CBC/PKCS7Padding",
            kdf: "PBKDF2WithHmacSHA256",
            iterations: kdf::PBKDF2_ITERATIONS,
            key_bits: kdf::PBKDF2_KEY_BITS,
            iv_bytes: IV_LEN,
            salt: kdf::PBKDF2_SALT_STR,
            secure_key_bits: keys::SECURE_KEY_BITS,
            secure_iv_bits: keys::SECURE_IV_BITS,
        }
    }
}
