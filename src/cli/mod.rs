//! CLI module: the clap parser plus helpers shared by the subcommands.

pub mod commands;
pub mod logging;
pub mod output;

use std::io::Read;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::{Mode, Settings};
use crate::errors::{Aes256Error, Result};

/// aes256 CLI: AES-256-CBC text encryption with PBKDF2 key derivation.
#[derive(Parser)]
#[command(
    name = "aes256",
    about = "AES-256 text encryption with PBKDF2-derived keys",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Secret key the AES key is derived from (prompted if omitted)
    #[arg(short, long, env = "AES256_SECRET_KEY", global = true, hide_env_values = true)]
    pub key: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt text to Base64 ciphertext
    Encrypt {
        /// Text to encrypt (read from stdin if omitted)
        text: Option<String>,

        /// 16-byte initialization vector (required in cbc mode)
        #[arg(long)]
        iv: Option<String>,

        /// Cipher mode (default from .aes256.toml, else cbc)
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Wrap Base64 output at 76 columns
        #[arg(short, long)]
        wrap: bool,
    },

    /// Decrypt Base64 ciphertext back to text
    Decrypt {
        /// Base64 ciphertext (read from stdin if omitted)
        ciphertext: Option<String>,

        /// 16-byte initialization vector (required in cbc mode)
        #[arg(long)]
        iv: Option<String>,

        /// Cipher mode (default from .aes256.toml, else cbc)
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,
    },

    /// Generate a 128-bit secure key from a password (hex)
    GenKey {
        /// Password (prompted if omitted)
        password: Option<String>,

        /// Print JSON instead of bare hex
        #[arg(long)]
        json: bool,
    },

    /// Generate a 512-bit secure IV from a password (hex)
    GenIv {
        /// Password (prompted if omitted)
        password: Option<String>,

        /// Print JSON instead of bare hex
        #[arg(long)]
        json: bool,
    },

    /// Show the fixed algorithm parameters
    Params {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from `.aes256.toml` in the current directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Get the secret key, trying in order:
/// 1. `--key` flag or `AES256_SECRET_KEY` env var
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn secret_key(cli: &Cli) -> Result<Zeroizing<String>> {
    if let Some(key) = cli.key.as_deref() {
        return Ok(Zeroizing::new(key.to_string()));
    }

    let key = dialoguer::Password::new()
        .with_prompt("Enter secret key")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| Aes256Error::CommandFailed(format!("secret prompt: {e}")))?;
    Ok(Zeroizing::new(key))
}

/// Get a password from the positional argument or an interactive prompt.
pub fn password(arg: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(pw) = arg {
        return Ok(Zeroizing::new(pw.to_string()));
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| Aes256Error::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Return `arg` or, if absent, all of stdin.
///
/// A single trailing line break from stdin is dropped so that
/// `echo text | aes256 encrypt` encrypts `text`, not `text\n`.
pub fn input_text(arg: Option<&str>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text.to_string());
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| Aes256Error::CommandFailed(format!("failed to read stdin: {e}")))?;
    Ok(strip_line_break(buf))
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Require an IV for cbc mode.
pub fn require_iv(iv: Option<&str>) -> Result<&str> {
    iv.ok_or_else(|| Aes256Error::CommandFailed("--iv is required in cbc mode".into()))
}
