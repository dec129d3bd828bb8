use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::encoding::Base64Layout;
use crate::crypto::kdf::PBKDF2_ITERATIONS;
use crate::crypto::sealed::{DEFAULT_SEAL_ITERATIONS, MAX_SEAL_ITERATIONS};
use crate::errors::{Aes256Error, Result};

/// Which cipher the CLI uses when `--mode` is not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// AES-256-CBC with the fixed PBKDF2 salt (interoperable).
    #[default]
    Cbc,
    /// AES-256-GCM with a random salt and nonce (authenticated).
    Gcm,
}

/// Project-level configuration, loaded from `.aes256.toml`.
///
/// Every field has a sensible default so aes256 works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Cipher mode used when none is specified.
    #[serde(default)]
    pub default_mode: Mode,

    /// Layout of Base64 ciphertext output.
    #[serde(default)]
    pub base64_layout: Base64Layout,

    /// PBKDF2 rounds for the GCM mode (default: 100 000).
    #[serde(default = "default_sealed_iterations")]
    pub sealed_iterations: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_sealed_iterations() -> u32 {
    DEFAULT_SEAL_ITERATIONS
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            base64_layout: Base64Layout::default(),
            sealed_iterations: default_sealed_iterations(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    pub const FILE_NAME: &'static str = ".aes256.toml";

    /// Load settings from `<dir>/.aes256.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            Aes256Error::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        tracing::debug!(path = %config_path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Reject round counts the GCM mode would refuse to seal with.
    pub fn validate(&self) -> Result<()> {
        if !(PBKDF2_ITERATIONS..=MAX_SEAL_ITERATIONS).contains(&self.sealed_iterations) {
            return Err(Aes256Error::ConfigError(format!(
                "sealed_iterations must be between {PBKDF2_ITERATIONS} and \
                 {MAX_SEAL_ITERATIONS} (got {})",
                self.sealed_iterations
            )));
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
