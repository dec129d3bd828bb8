//! `aes256 encrypt` — encrypt text to Base64 ciphertext.

use zeroize::Zeroizing;

use crate::cli::{input_text, load_settings, output, require_iv, secret_key, Cli};
use crate::config::Mode;
use crate::crypto::{encrypt_with_layout, seal_with, Base64Layout};
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(
    cli: &Cli,
    text: Option<&str>,
    iv: Option<&str>,
    mode: Option<Mode>,
    wrap: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let mode = mode.unwrap_or(settings.default_mode);
    let layout = if wrap {
        Base64Layout::Wrapped
    } else {
        settings.base64_layout
    };

    // Fail on a missing IV before prompting for anything.
    if mode == Mode::Cbc {
        require_iv(iv)?;
    } else if iv.is_some() {
        output::warning("--iv is ignored in gcm mode (a random nonce is used)");
    }

    let key = secret_key(cli)?;
    let plaintext = Zeroizing::new(input_text(text)?);

    let ciphertext = match mode {
        Mode::Cbc => encrypt_with_layout(&key, require_iv(iv)?, &plaintext, layout)?,
        Mode::Gcm => seal_with(
            &key,
            &plaintext,
            settings.sealed_iterations,
            layout,
            &mut rand::rng(),
        )?,
    };

    println!("{}", ciphertext.trim_end());
    Ok(())
}
