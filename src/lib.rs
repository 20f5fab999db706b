pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::{
    messages::Locale,
    notebook::Notebook,
    shell::{Shell, ShellOptions},
    Record, RecordStore,
};
pub use crate::utils::error::{NotebookError, Result};
