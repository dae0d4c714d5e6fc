//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::ReportConfig;

/// Loads and provides access to report configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_events::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Currency: {}", loader.config().currency_symbol);
/// # Ok::<(), payroll_events::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown keys (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        debug!(path = %path_str, "Loaded report configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> PayrollResult<Self> {
        let config: ReportConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonthOrder;
    use std::path::PathBuf;

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load("./config/payroll.yaml");
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_load_overrides() {
        let loader = ConfigLoader::load("./tests/fixtures/chronological.yaml").unwrap();
        let config = loader.config();

        assert_eq!(config.month_order, MonthOrder::Chronological);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(
            config.input,
            PathBuf::from("tests/fixtures/employee_details.txt")
        );
        assert_eq!(config.date_format, "%d-%m-%Y");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/payroll.yaml") {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        match ConfigLoader::load("./tests/fixtures/invalid.yaml") {
            Err(PayrollError::ConfigParseError { path, .. }) => {
                assert!(path.contains("invalid.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bad_delimiter_returns_invalid_config() {
        match ConfigLoader::load("./tests/fixtures/bad_delimiter.yaml") {
            Err(PayrollError::InvalidConfig { field, .. }) => assert_eq!(field, "delimiter"),
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml("{}", "inline").unwrap();
        assert_eq!(loader.config(), &ReportConfig::default());
    }
}
