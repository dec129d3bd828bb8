//! Colored terminal output helpers.
//!
//! All user-facing messages go through these functions so we get
//! consistent styling across every command. Status messages go to
//! stderr; stdout carries only command results so it can be piped.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::crypto::Params;

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the fixed algorithm parameters as a two-column table.
pub fn print_params_table(params: &Params) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Parameter", "Value"]);

    table.add_row(vec!["Cipher".to_string(), params.transformation.to_string()]);
    table.add_row(vec!["Key derivation".to_string(), params.kdf.to_string()]);
    table.add_row(vec!["Iterations".to_string(), params.iterations.to_string()]);
    table.add_row(vec!["Key length".to_string(), format!("{} bits", params.key_bits)]);
    table.add_row(vec!["IV length".to_string(), format!("{} bytes", params.iv_bytes)]);
    table.add_row(vec!["Salt".to_string(), params.salt.to_string()]);
    table.add_row(vec![
        "Generated key".to_string(),
        format!("{} bits", params.secure_key_bits),
    ]);
    table.add_row(vec![
        "Generated IV".to_string(),
        format!("{} bits", params.secure_iv_bits),
    ]);

    println!("{table}");
}
