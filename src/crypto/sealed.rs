//! AES-256-GCM authenticated encryption, the opt-in upgrade path from CBC.
//!
//! Unlike the CBC surface, every call draws a random salt and nonce, so the
//! secret alone is enough to open the result and any tampering is caught
//! by the auth tag. The PBKDF2 round count travels in the blob, so a
//! sealed value stays openable after the configured count changes.
//!
//! Layout of the decoded Base64 blob:
//!   [ 4-byte rounds (BE u32) | 16-byte salt | 12-byte nonce | ciphertext + 16-byte tag ]

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::CryptoRng;

use crate::crypto::encoding::{decode_base64, encode_base64, Base64Layout};
use crate::crypto::kdf::{
    derive_pbkdf2, generate_salt, PBKDF2_ITERATIONS, PBKDF2_KEY_BITS, SALT_LEN,
};
use crate::errors::{Aes256Error, Result};

/// Size of the stored round count in bytes.
const ROUNDS_LEN: usize = 4;

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the GCM auth tag in bytes.
const TAG_LEN: usize = 16;

/// Default PBKDF2 rounds for the sealed format.
pub const DEFAULT_SEAL_ITERATIONS: u32 = 100_000;

/// Fewest PBKDF2 rounds a sealed blob may declare.
pub const MIN_SEAL_ITERATIONS: u32 = PBKDF2_ITERATIONS;

/// Most PBKDF2 rounds a sealed blob may declare.
pub const MAX_SEAL_ITERATIONS: u32 = 10_000_000;

/// Seal `plaintext` under `secret` with the default iteration count.
pub fn seal(secret: &str, plaintext: &str) -> Result<String> {
    seal_with(
        secret,
        plaintext,
        DEFAULT_SEAL_ITERATIONS,
        Base64Layout::Standard,
        &mut rand::rng(),
    )
}

/// Seal `plaintext` with explicit PBKDF2 rounds, layout and randomness.
pub fn seal_with<R: CryptoRng + ?Sized>(
    secret: &str,
    plaintext: &str,
    iterations: u32,
    layout: Base64Layout,
    rng: &mut R,
) -> Result<String> {
    check_rounds(iterations)?;

    let salt = generate_salt(rng);
    let key = derive_pbkdf2(secret.as_bytes(), &salt, iterations, PBKDF2_KEY_BITS)?;

    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| Aes256Error::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| Aes256Error::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(ROUNDS_LEN + SALT_LEN + NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&iterations.to_be_bytes());
    output.extend_from_slice(&salt);
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&ciphertext);

    tracing::debug!(iterations, sealed_len = output.len(), "sealed with AES-256-GCM");
    Ok(encode_base64(&output, layout))
}

/// Open a blob produced by [`seal`] or [`seal_with`].
///
/// The round count is read from the blob itself.
pub fn open(secret: &str, sealed: &str) -> Result<String> {
    let blob = decode_base64(sealed)?;
    if blob.len() < ROUNDS_LEN + SALT_LEN + NONCE_LEN + TAG_LEN {
        return Err(Aes256Error::DecryptionFailed);
    }

    let (rounds, rest) = blob.split_at(ROUNDS_LEN);
    let (salt, rest) = rest.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let mut rounds_be = [0u8; ROUNDS_LEN];
    rounds_be.copy_from_slice(rounds);
    let iterations = u32::from_be_bytes(rounds_be);
    check_rounds(iterations)?;

    let key = derive_pbkdf2(secret.as_bytes(), salt, iterations, PBKDF2_KEY_BITS)?;
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| Aes256Error::DecryptionFailed)?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| Aes256Error::DecryptionFailed)?;

    tracing::debug!(iterations, "opened AES-256-GCM blob");
    String::from_utf8(plaintext).map_err(|_| Aes256Error::InvalidTextEncoding)
}

fn check_rounds(iterations: u32) -> Result<()> {
    if !(MIN_SEAL_ITERATIONS..=MAX_SEAL_ITERATIONS).contains(&iterations) {
        return Err(Aes256Error::KeyDerivation(format!(
            "sealed PBKDF2 rounds must be between {MIN_SEAL_ITERATIONS} and \
             {MAX_SEAL_ITERATIONS} (got {iterations})"
        )));
    }
    Ok(())
}
