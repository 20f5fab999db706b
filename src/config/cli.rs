use crate::config::toml_config::TomlConfig;
use crate::core::messages::Locale;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "addr-book")]
#[command(about = "Interactive in-memory address book")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Message set for the console (overrides the config file)
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Do not print the menu before each prompt
    #[arg(long)]
    pub no_menu: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, then applies flag overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(locale) = self.locale {
            config.shell.locale = locale;
        }
        if self.no_menu {
            config.shell.show_menu = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let cli = CliConfig::parse_from(["addr-book"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.shell.locale, Locale::En);
        assert!(config.shell.show_menu);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[shell]\nlocale = \"en\"\nshow_menu = true\n")
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::parse_from(["addr-book", "--config", path.as_str(), "--locale", "ru", "--no-menu"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.shell.locale, Locale::Ru);
        assert!(!config.shell.show_menu);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = CliConfig::parse_from(["addr-book", "-c", "/nonexistent/addr-book.toml"]);
        assert!(cli.resolve().is_err());
    }
}
