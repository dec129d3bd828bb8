//! Secure key and IV generation from a password.
//!
//! Each call salts PBKDF2 with 16 fresh random bytes that are never
//! returned, so the output cannot be re-derived from the password later.
//! Callers must store what they get back.
//!
//! The output sizes do not line up with what [`crate::crypto::encrypt`]
//! consumes: the key generator yields 128 bits (32 hex chars) and the IV
//! generator 512 bits (128 hex chars), while `encrypt` wants a secret of
//! any length and an IV of exactly 16 bytes. Existing callers depend on
//! these sizes, so they are kept as they are.

use rand::CryptoRng;

use crate::crypto::encoding::encode_hex;
use crate::crypto::kdf::{derive_pbkdf2, generate_salt, PBKDF2_ITERATIONS};
use crate::errors::Result;

/// Bit length of a generated secure key.
pub const SECURE_KEY_BITS: u32 = 128;

/// Bit length of a generated secure IV.
pub const SECURE_IV_BITS: u32 = 512;

/// Generate a 128-bit key from `password` as 32 lowercase hex chars.
///
/// Uses the thread-local CSPRNG for the salt.
pub fn generate_secure_key(password: &str) -> Result<String> {
    generate_secure_key_with_rng(password, &mut rand::rng())
}

/// Generate a 512-bit IV from `password` as 128 lowercase hex chars.
///
/// Uses the thread-local CSPRNG for the salt.
pub fn generate_secure_iv(password: &str) -> Result<String> {
    generate_secure_iv_with_rng(password, &mut rand::rng())
}

/// Like [`generate_secure_key`], drawing the salt from `rng`.
pub fn generate_secure_key_with_rng<R: CryptoRng + ?Sized>(
    password: &str,
    rng: &mut R,
) -> Result<String> {
    generate_hex(password, SECURE_KEY_BITS, rng)
}

/// Like [`generate_secure_iv`], drawing the salt from `rng`.
pub fn generate_secure_iv_with_rng<R: CryptoRng + ?Sized>(
    password: &str,
    rng: &mut R,
) -> Result<String> {
    generate_hex(password, SECURE_IV_BITS, rng)
}

fn generate_hex<R: CryptoRng + ?Sized>(password: &str, bits: u32, rng: &mut R) -> Result<String> {
    let salt = generate_salt(rng);
    let material = derive_pbkdf2(password.as_bytes(), &salt, PBKDF2_ITERATIONS, bits)?;
    Ok(encode_hex(&material))
}
