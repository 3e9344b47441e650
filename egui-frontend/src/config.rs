//! # Configuration
//!
//! Start-up settings for the planner. Every field has a compile-time default;
//! an optional YAML file named by `COLLEGE_LIFE_CONFIG` can override any subset
//! of them. The file is only ever read.
//!
//! ```yaml
//! monthly_budget: 950.0
//! student_name: Sam
//! ```

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable pointing at an optional YAML config file
pub const CONFIG_ENV_VAR: &str = "COLLEGE_LIFE_CONFIG";

/// Default monthly budget in dollars
pub const DEFAULT_MONTHLY_BUDGET: f64 = 800.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Budget the expense tracker measures spending against
    pub monthly_budget: f64,
    pub currency_symbol: String,
    /// First name used in the dashboard greeting
    pub student_name: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            currency_symbol: "$".to_string(),
            student_name: "Alex".to_string(),
            window_width: 480.0,
            window_height: 860.0,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from `COLLEGE_LIFE_CONFIG`, falling back to defaults
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => {
                info!("⚙️ No {} set, using default configuration", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Read a YAML config file; missing fields keep their defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        info!("⚙️ Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.monthly_budget < 0.0 {
            anyhow::bail!("monthly_budget cannot be negative (got {})", config.monthly_budget);
        }

        Ok(config)
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, amount.abs())
        } else {
            format!("{}{:.2}", self.currency_symbol, amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.monthly_budget, 800.0);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.student_name, "Alex");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "monthly_budget: 950.5").unwrap();
        writeln!(file, "student_name: Sam").unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.monthly_budget, 950.5);
        assert_eq!(config.student_name, "Sam");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "monthly_budget: -5").unwrap();

        assert!(AppConfig::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_path(&dir.path().join("missing.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_format_amount() {
        let config = AppConfig::default();
        assert_eq!(config.format_amount(620.0), "$620.00");
        assert_eq!(config.format_amount(-12.5), "-$12.50");
    }
}
