//! `aes256 gen-key` / `aes256 gen-iv` — derive hex key material from a password.
//!
//! The salt is random and discarded, so the printed value is the only
//! copy. Its size does not match what `encrypt` consumes (see
//! [`crate::crypto::keys`]).

use serde_json::json;

use crate::cli::{output, password};
use crate::crypto::keys::{SECURE_IV_BITS, SECURE_KEY_BITS};
use crate::crypto::{generate_secure_iv, generate_secure_key};
use crate::errors::{Aes256Error, Result};

/// Execute the `gen-key` command.
pub fn execute_key(password_arg: Option<&str>, as_json: bool) -> Result<()> {
    let pw = password(password_arg)?;
    let key = generate_secure_key(&pw)?;
    emit("key", &key, SECURE_KEY_BITS, as_json)
}

/// Execute the `gen-iv` command.
pub fn execute_iv(password_arg: Option<&str>, as_json: bool) -> Result<()> {
    let pw = password(password_arg)?;
    let iv = generate_secure_iv(&pw)?;
    emit("iv", &iv, SECURE_IV_BITS, as_json)
}

fn emit(field: &str, value: &str, bits: u32, as_json: bool) -> Result<()> {
    if as_json {
        let doc = json!({ field: value, "bits": bits, "encoding": "hex" });
        let text = serde_json::to_string_pretty(&doc)
            .map_err(|e| Aes256Error::SerializationError(e.to_string()))?;
        println!("{text}");
    } else {
        println!("{value}");
        output::tip("Store this value: it comes from a random salt and cannot be derived again.");
    }
    Ok(())
}
