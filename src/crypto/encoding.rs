//! Text encodings for ciphertext and generated key material.
//!
//! Ciphertext travels as standard Base64 (RFC 4648, padded). The Android
//! client wraps its Base64 output at 76 columns, so decoding skips ASCII
//! whitespace and [`Base64Layout::Wrapped`] can reproduce that output.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{Aes256Error, Result};

/// Column at which wrapped Base64 output breaks lines.
const WRAP_COLUMN: usize = 76;

/// How Base64 ciphertext is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base64Layout {
    /// One unbroken line, no trailing newline.
    #[default]
    Standard,
    /// A newline after every 76 characters and at the end.
    Wrapped,
}

/// Encode `bytes` as standard padded Base64 in the given layout.
pub fn encode_base64(bytes: &[u8], layout: Base64Layout) -> String {
    let encoded = BASE64.encode(bytes);
    match layout {
        Base64Layout::Standard => encoded,
        Base64Layout::Wrapped => {
            let mut out = String::with_capacity(encoded.len() + encoded.len() / WRAP_COLUMN + 1);
            for (i, c) in encoded.chars().enumerate() {
                if i > 0 && i % WRAP_COLUMN == 0 {
                    out.push('\n');
                }
                out.push(c);
            }
            out.push('\n');
            out
        }
    }
}

/// Decode standard Base64, ignoring any ASCII whitespace.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    BASE64
        .decode(compact.as_bytes())
        .map_err(|e| Aes256Error::InvalidEncoding(e.to_string()))
}

/// Encode bytes as lowercase hexadecimal.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
