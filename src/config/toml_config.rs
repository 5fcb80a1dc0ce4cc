use crate::domain::clock::{Clock, FixedClock, SystemClock};
use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::{validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const REFERENCE_YEAR_MIN: i32 = 1900;
pub const REFERENCE_YEAR_MAX: i32 = 9999;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    pub logging: LoggingConfig,
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Pins every years-enrolled computation to this calendar year.
    pub reference_year: Option<i32>,
}

impl RecordsConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecordsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text, substituting `${VAR}` placeholders first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecordsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecordsError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(RecordsError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Unsupported level. Valid levels: {}", LOG_LEVELS.join(", ")),
            });
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(RecordsError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: self.logging.format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    LOG_FORMATS.join(", ")
                ),
            });
        }

        if let Some(year) = self.clock.reference_year {
            validate_range(
                "clock.reference_year",
                year,
                REFERENCE_YEAR_MIN,
                REFERENCE_YEAR_MAX,
            )
            .map_err(|e| RecordsError::InvalidConfigValueError {
                field: e.field,
                value: e.value,
                reason: e.reason,
            })?;
        }

        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.clock.reference_year {
            Some(year) => Box::new(FixedClock(year)),
            None => Box::new(SystemClock),
        }
    }
}

impl Validate for RecordsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[logging]
level = "debug"
format = "json"

[clock]
reference_year = 2025
"#;

        let config = RecordsConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.json_logs());
        assert_eq!(config.clock.reference_year, Some(2025));
        assert_eq!(config.clock().current_year(), 2025);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RecordsConfig::from_toml_str("").unwrap();
        assert_eq!(config, RecordsConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(!config.json_logs());
        assert_eq!(config.clock().current_year(), SystemClock.current_year());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STUDENT_RECORDS_TEST_LEVEL", "warn");

        let toml_content = r#"
[logging]
level = "${STUDENT_RECORDS_TEST_LEVEL}"
format = "${STUDENT_RECORDS_TEST_UNSET_FORMAT}"
"#;

        let config = RecordsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "${STUDENT_RECORDS_TEST_UNSET_FORMAT}");
        assert!(config.validate().is_err());

        std::env::remove_var("STUDENT_RECORDS_TEST_LEVEL");
    }

    #[test]
    fn test_config_validation() {
        let bad_level = RecordsConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap();
        assert!(matches!(
            bad_level.validate(),
            Err(RecordsError::InvalidConfigValueError { ref field, .. }) if field == "logging.level"
        ));

        let bad_year = RecordsConfig::from_toml_str("[clock]\nreference_year = 12").unwrap();
        assert!(matches!(
            bad_year.validate(),
            Err(RecordsError::InvalidConfigValueError { ref field, .. })
                if field == "clock.reference_year"
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = RecordsConfig::from_toml_str("[logging\nlevel = ").unwrap_err();
        assert!(matches!(err, RecordsError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[clock]\nreference_year = 2030\n")
            .unwrap();

        let config = RecordsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.clock.reference_year, Some(2030));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = RecordsConfig::from_file("/nonexistent/student-records.toml").unwrap_err();
        assert!(matches!(err, RecordsError::IoError(_)));
    }
}
