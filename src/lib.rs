//! AES-256-CBC text encryption with PBKDF2-HMAC-SHA256 key derivation.
//!
//! The library surface lives in [`crypto`]: [`crypto::encrypt`],
//! [`crypto::decrypt`], [`crypto::generate_secure_key`] and
//! [`crypto::generate_secure_iv`], plus the opt-in authenticated
//! [`crypto::seal`] / [`crypto::open`] pair.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;

pub use errors::{Aes256Error, Result};
