//! `aes256 params` — show the fixed algorithm parameters.

use crate::cli::output;
use crate::crypto::Params;
use crate::errors::{Aes256Error, Result};

/// Execute the `params` command.
pub fn execute(as_json: bool) -> Result<()> {
    let params = Params::compatible();

    if as_json {
        let text = serde_json::to_string_pretty(&params)
            .map_err(|e| Aes256Error::SerializationError(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    output::print_params_table(&params);
    output::warning("The PBKDF2 salt is fixed and shared by every installation.");
    output::tip("Use `--mode gcm` for authenticated encryption with a random salt.");
    Ok(())
}
