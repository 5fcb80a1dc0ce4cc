pub mod toml_config;

pub use toml_config::RecordsConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "student-records")]
#[command(about = "Print a report of the university student roster")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Compute years enrolled as of this year instead of the current one
    #[arg(long)]
    pub reference_year: Option<i32>,

    /// Only report students in this department
    #[arg(long)]
    pub department: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file, if any, and applies command-line overrides.
    pub fn load_config(&self) -> crate::utils::error::Result<RecordsConfig> {
        let mut config = match &self.config {
            Some(path) => RecordsConfig::from_file(path)?,
            None => RecordsConfig::default(),
        };
        if let Some(year) = self.reference_year {
            config.clock.reference_year = Some(year);
        }
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_reference_year_overrides_default() {
        let cli = CliConfig::parse_from(["student-records", "--reference-year", "2024"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.clock.reference_year, Some(2024));
        assert!(cli.department.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "student-records",
            "-v",
            "--department",
            "Physics",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.department.as_deref(), Some("Physics"));
        assert_eq!(cli.load_config().unwrap(), RecordsConfig::default());
    }
}
