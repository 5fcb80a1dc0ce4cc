use thiserror::Error;

/// Rejection raised by a validated mutator. The record is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation error: {field} {reason} (got {value:?})")]
pub struct ValidationError {
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate student ID: {student_id}")]
    DuplicateStudentId { student_id: String },

    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: String },
}

impl RecordsError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordsError::Validation(e) => format!("Invalid {}: {}", e.field, e.reason),
            RecordsError::IoError(e) => format!("Could not read file: {}", e),
            RecordsError::ConfigError { message } => format!("Configuration problem: {}", message),
            RecordsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            RecordsError::DuplicateStudentId { student_id } => {
                format!("A student with ID {} is already registered", student_id)
            }
            RecordsError::StudentNotFound { student_id } => {
                format!("No student with ID {} is registered", student_id)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecordsError::Validation(_) => "Correct the value and retry the update",
            RecordsError::IoError(_) => "Check that the file exists and is readable",
            RecordsError::ConfigError { .. } => "Check the configuration file is valid TOML",
            RecordsError::InvalidConfigValueError { .. } => {
                "Fix the listed configuration value and run again"
            }
            RecordsError::DuplicateStudentId { .. } => "Use a unique student ID",
            RecordsError::StudentNotFound { .. } => "Check the student ID",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
