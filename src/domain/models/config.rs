//! Application configuration model.

use serde::{Deserialize, Serialize};

/// Main configuration structure for Triage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Analysis defaults.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied to analysis runs when the caller does not override
/// them on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisConfig {
    /// Strategy used when none is given. Unknown names resolve to
    /// `smart_balance` at use time.
    #[serde(default = "default_strategy")]
    pub default_strategy: String,

    /// How many tasks the suggestion read path returns.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_strategy() -> String {
    "smart_balance".to_string()
}

const fn default_suggestion_limit() -> usize {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.analysis.default_strategy, "smart_balance");
        assert_eq!(config.analysis.suggestion_limit, 3);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config =
            serde_yaml::from_str("analysis:\n  suggestion_limit: 5\n").unwrap();
        assert_eq!(config.analysis.suggestion_limit, 5);
        assert_eq!(config.analysis.default_strategy, "smart_balance");
        assert_eq!(config.logging.level, "info");
    }
}
