//! AES-256-CBC text encryption with PKCS7 padding.
//!
//! The key is never used directly: the caller's secret is stretched with
//! PBKDF2-HMAC-SHA256 over the fixed salt, so `encrypt` and `decrypt`
//! arrive at the same 32-byte key independently. The IV is the raw UTF-8
//! bytes of a 16-character string and is *not* carried in the output; the
//! caller keeps it alongside the ciphertext.
//!
//! CBC with PKCS7 gives confidentiality only. The padding check on decrypt
//! is the single corruption signal available. See [`crate::crypto::sealed`]
//! for the authenticated alternative.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::encoding::{decode_base64, encode_base64, Base64Layout};
use crate::crypto::kdf::derive_cipher_key;
use crate::errors::{Aes256Error, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Required IV length in bytes.
pub const IV_LEN: usize = 16;

/// AES block size in bytes.
const BLOCK_LEN: usize = 16;

/// Encrypt `plaintext` and return standard single-line Base64.
///
/// Deterministic: the same secret, IV and plaintext always give the same
/// output.
pub fn encrypt(secure_key: &str, iv: &str, plaintext: &str) -> Result<String> {
    encrypt_with_layout(secure_key, iv, plaintext, Base64Layout::Standard)
}

/// Encrypt `plaintext` and lay the Base64 out as requested.
pub fn encrypt_with_layout(
    secure_key: &str,
    iv: &str,
    plaintext: &str,
    layout: Base64Layout,
) -> Result<String> {
    let ciphertext = encrypt_bytes(secure_key, iv, plaintext.as_bytes())?;
    Ok(encode_base64(&ciphertext, layout))
}

/// Decrypt Base64 ciphertext produced by [`encrypt`] (or by the Android
/// client, whose line-wrapped Base64 is accepted as is).
pub fn decrypt(secure_key: &str, iv: &str, base64_ciphertext: &str) -> Result<String> {
    let key = derive_cipher_key(secure_key.as_bytes())?;
    let iv = iv_bytes(iv)?;
    let ciphertext = decode_base64(base64_ciphertext)?;

    let plaintext = decrypt_raw(&key, iv, &ciphertext)?;
    String::from_utf8(plaintext).map_err(|_| Aes256Error::InvalidTextEncoding)
}

/// Encrypt raw bytes, returning raw ciphertext (no encoding).
pub fn encrypt_bytes(secure_key: &str, iv: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    let key = derive_cipher_key(secure_key.as_bytes())?;
    let iv = iv_bytes(iv)?;

    let cipher = Aes256CbcEnc::new_from_slices(&key, iv)
        .map_err(|e| Aes256Error::EncryptionFailed(format!("cipher init: {e}")))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted with AES-256-CBC"
    );
    Ok(ciphertext)
}

/// Decrypt raw ciphertext bytes, returning the unpadded plaintext bytes.
pub fn decrypt_bytes(secure_key: &str, iv: &str, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let key = derive_cipher_key(secure_key.as_bytes())?;
    let iv = iv_bytes(iv)?;
    decrypt_raw(&key, iv, ciphertext)
}

fn decrypt_raw(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    // An empty or ragged ciphertext can never carry valid padding.
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        tracing::debug!(ciphertext_len = ciphertext.len(), "ciphertext is not whole blocks");
        return Err(Aes256Error::PaddingOrAuthenticity);
    }

    let cipher =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| Aes256Error::PaddingOrAuthenticity)?;
    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Aes256Error::PaddingOrAuthenticity)?;

    tracing::debug!(
        ciphertext_len = ciphertext.len(),
        plaintext_len = plaintext.len(),
        "decrypted with AES-256-CBC"
    );
    Ok(plaintext)
}

/// Validate that `iv` encodes to exactly 16 UTF-8 bytes.
fn iv_bytes(iv: &str) -> Result<&[u8]> {
    let bytes = iv.as_bytes();
    if bytes.len() != IV_LEN {
        return Err(Aes256Error::InvalidIvLength(bytes.len()));
    }
    Ok(bytes)
}
