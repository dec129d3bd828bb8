//! Password-based key derivation using PBKDF2-HMAC-SHA256 (RFC 8018).
//!
//! Every derivation in this crate funnels through [`derive_pbkdf2`]. The
//! CBC surface derives with the fixed [`PBKDF2_SALT`] so that `encrypt` and
//! `decrypt` re-derive the same key independently; the generators use a
//! fresh random salt from [`generate_salt`].

use hmac::Hmac;
use rand::CryptoRng;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::errors::{Aes256Error, Result};

/// Iteration count shared by every PBKDF2 call of the compatible surface.
pub const PBKDF2_ITERATIONS: u32 = 1001;

/// Salt used for every `encrypt`/`decrypt` key derivation, as text.
///
/// This constant is shared across all secrets and installations, which
/// weakens PBKDF2 against precomputed dictionaries. It cannot change
/// without breaking existing ciphertext.
pub const PBKDF2_SALT_STR: &str = "VA9aJs1wud3al1aD";

/// [`PBKDF2_SALT_STR`] as the bytes fed to PBKDF2.
pub const PBKDF2_SALT: &[u8] = PBKDF2_SALT_STR.as_bytes();

/// Length of the derived AES key in bits.
pub const PBKDF2_KEY_BITS: u32 = 256;

/// Length of a random salt in bytes.
pub const SALT_LEN: usize = 16;

/// Derive `output_bits / 8` bytes from `secret` and `salt`.
///
/// The same inputs always produce the same output. Fails if
/// `output_bits` is not a positive multiple of 8 or `iterations` is zero.
pub fn derive_pbkdf2(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    output_bits: u32,
) -> Result<Zeroizing<Vec<u8>>> {
    if output_bits == 0 || output_bits % 8 != 0 {
        return Err(Aes256Error::KeyDerivation(format!(
            "output length must be a positive multiple of 8 bits (got {output_bits})"
        )));
    }
    if iterations == 0 {
        return Err(Aes256Error::KeyDerivation(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }

    let mut out = Zeroizing::new(vec![0u8; (output_bits / 8) as usize]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(secret, salt, iterations, &mut out)
        .map_err(|e| Aes256Error::KeyDerivation(format!("PBKDF2 failed: {e}")))?;

    tracing::debug!(
        iterations,
        output_bits,
        salt_len = salt.len(),
        "derived PBKDF2 key material"
    );
    Ok(out)
}

/// Derive the 32-byte AES key used by `encrypt` and `decrypt`.
pub fn derive_cipher_key(secret: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    derive_pbkdf2(secret, PBKDF2_SALT, PBKDF2_ITERATIONS, PBKDF2_KEY_BITS)
}

/// Draw a fresh 16-byte salt from `rng`.
pub fn generate_salt<R: CryptoRng + ?Sized>(rng: &mut R) -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    salt
}
