use aes256::cli::{commands, logging, output, Cli, Commands};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Encrypt {
            ref text,
            ref iv,
            mode,
            wrap,
        } => commands::encrypt::execute(&cli, text.as_deref(), iv.as_deref(), mode, wrap),
        Commands::Decrypt {
            ref ciphertext,
            ref iv,
            mode,
        } => commands::decrypt::execute(&cli, ciphertext.as_deref(), iv.as_deref(), mode),
        Commands::GenKey {
            ref password,
            json,
        } => commands::generate::execute_key(password.as_deref(), json),
        Commands::GenIv {
            ref password,
            json,
        } => commands::generate::execute_iv(password.as_deref(), json),
        Commands::Params { json } => commands::params::execute(json),
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
