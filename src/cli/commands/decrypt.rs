//! `aes256 decrypt` — decrypt Base64 ciphertext back to text.

use zeroize::Zeroizing;

use crate::cli::{input_text, load_settings, output, require_iv, secret_key, Cli};
use crate::config::Mode;
use crate::crypto::{decrypt, open};
use crate::errors::Result;

/// Execute the `decrypt` command.
pub fn execute(
    cli: &Cli,
    ciphertext: Option<&str>,
    iv: Option<&str>,
    mode: Option<Mode>,
) -> Result<()> {
    let settings = load_settings()?;
    let mode = mode.unwrap_or(settings.default_mode);

    if mode == Mode::Cbc {
        require_iv(iv)?;
    } else if iv.is_some() {
        output::warning("--iv is ignored in gcm mode (the nonce travels with the ciphertext)");
    }

    let key = secret_key(cli)?;
    let ciphertext = input_text(ciphertext)?;

    let plaintext = Zeroizing::new(match mode {
        Mode::Cbc => decrypt(&key, require_iv(iv)?, &ciphertext)?,
        Mode::Gcm => open(&key, &ciphertext)?,
    });

    println!("{}", plaintext.as_str());
    Ok(())
}
