//! `aes256 completions` — generate shell completion scripts.
//!
//! Usage:
//!   aes256 completions bash > ~/.bash_completion.d/aes256
//!   aes256 completions zsh

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command, writing the script to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut io::stdout());
    Ok(())
}

fn write_script(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "aes256", out);
}
