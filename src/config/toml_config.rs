use crate::core::messages::Locale;
use crate::core::shell::ShellOptions;
use crate::utils::error::{NotebookError, Result};
use crate::utils::validation::{validate_one_of, Validate, LOG_LEVELS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub locale: Locale,
    pub show_menu: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            show_menu: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NotebookError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NotebookError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            locale: self.shell.locale,
            show_menu: self.shell.show_menu,
        }
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)
    }
}
