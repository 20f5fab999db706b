use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("all fields must be filled in")]
    EmptyField { field: &'static str },

    #[error("date must be in DD-MM-YYYY format")]
    InvalidDateFormat { value: String },

    #[error("record not found")]
    NotFound { query: String },

    #[error("no records exist")]
    EmptyStore,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NotebookError {
    /// Store errors end a single command; everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NotebookError::EmptyField { .. }
                | NotebookError::InvalidDateFormat { .. }
                | NotebookError::NotFound { .. }
                | NotebookError::EmptyStore
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NotebookError::EmptyField { field } => format!("Provide a value for {}", field),
            NotebookError::InvalidDateFormat { .. } => {
                "Enter the birthdate as DD-MM-YYYY, e.g. 01-01-1990".to_string()
            }
            NotebookError::NotFound { .. } | NotebookError::EmptyStore => {
                "Add a record first with menu choice 1".to_string()
            }
            NotebookError::IoError(_) => {
                "Check that standard input and output are still open".to_string()
            }
            NotebookError::ConfigError { .. } => {
                "Check that the config file exists and is valid TOML".to_string()
            }
            NotebookError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NotebookError>;
