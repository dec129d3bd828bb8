//! Configuration loaded from `.aes256.toml`.

pub mod settings;

pub use settings::{Mode, Settings};
