use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::{
    Matcher, DEFAULT_EXPIRY_DAYS, DEFAULT_LIMIT, DEFAULT_MIN_SCORE, MAX_EXPIRY_DAYS,
};
use crate::models::ScoringWeights;

/// Errors raised by semantic checks on loaded settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Scoring weights must be non-negative and sum to 1.0 (got {0})")]
    InvalidWeights(f64),

    #[error("default_limit ({default}) exceeds max_limit ({max})")]
    InvalidLimits { default: usize, max: usize },

    #[error("expiry_days must be between 1 and {max} (got {days})")]
    InvalidExpiry { days: i64, max: i64 },
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            expiry_days: default_expiry_days(),
        }
    }
}

fn default_min_score() -> u8 { DEFAULT_MIN_SCORE }
fn default_limit() -> usize { DEFAULT_LIMIT }
fn default_max_limit() -> usize { 100 }
fn default_expiry_days() -> i64 { DEFAULT_EXPIRY_DAYS }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_audience_weight")]
    pub audience: f64,
    #[serde(default = "default_performance_weight")]
    pub performance: f64,
    #[serde(default = "default_category_weight")]
    pub category: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_trust_weight")]
    pub trust: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            audience: default_audience_weight(),
            performance: default_performance_weight(),
            category: default_category_weight(),
            budget: default_budget_weight(),
            trust: default_trust_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(value: &WeightsConfig) -> Self {
        Self {
            audience: value.audience,
            performance: value.performance,
            category: value.category,
            budget: value.budget,
            trust: value.trust,
        }
    }
}

fn default_audience_weight() -> f64 { 0.30 }
fn default_performance_weight() -> f64 { 0.25 }
fn default_category_weight() -> f64 { 0.20 }
fn default_budget_weight() -> f64 { 0.15 }
fn default_trust_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SPONSOR_MATCH_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SPONSOR_MATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SPONSOR_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SPONSOR_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a TOML document, without environment overrides
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject weight sets and limits the matcher cannot use
    pub fn validate(&self) -> Result<(), SettingsError> {
        let weights = self.scoring_weights();
        let all_non_negative = [
            weights.audience,
            weights.performance,
            weights.category,
            weights.budget,
            weights.trust,
        ]
        .iter()
        .all(|w| *w >= 0.0);

        if !all_non_negative || (weights.sum() - 1.0).abs() > 1e-6 {
            return Err(SettingsError::InvalidWeights(weights.sum()));
        }

        if self.matching.default_limit > self.matching.max_limit {
            return Err(SettingsError::InvalidLimits {
                default: self.matching.default_limit,
                max: self.matching.max_limit,
            });
        }

        if !(1..=MAX_EXPIRY_DAYS).contains(&self.matching.expiry_days) {
            return Err(SettingsError::InvalidExpiry {
                days: self.matching.expiry_days,
                max: MAX_EXPIRY_DAYS,
            });
        }

        Ok(())
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    /// Build a matcher from the scoring and matching sections
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.scoring_weights())
            .with_min_score(self.matching.min_score)
            .with_expiry_days(self.matching.expiry_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.audience, 0.30);
        assert_eq!(weights.performance, 0.25);
        assert_eq!(weights.category, 0.20);
        assert_eq!(weights.budget, 0.15);
        assert_eq!(weights.trust, 0.10);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.matching.min_score, 50);
        assert_eq!(settings.matching.expiry_days, 7);
    }

    #[test]
    fn test_shipped_config_parses() {
        let settings = Settings::from_toml_str(include_str!("../config/default.toml"))
            .expect("default.toml should be valid");
        assert_eq!(settings.matching.default_limit, 10);
        assert_eq!(settings.scoring_weights(), ScoringWeights::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings = Settings::from_toml_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.matching.max_limit, 100);
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        let toml = "[scoring.weights]\naudience = 0.9\n";
        assert!(matches!(
            Settings::from_toml_str(toml),
            Err(SettingsError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_limits() {
        let toml = "[matching]\ndefault_limit = 50\nmax_limit = 20\n";
        assert!(matches!(
            Settings::from_toml_str(toml),
            Err(SettingsError::InvalidLimits { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_expiry() {
        for days in ["-30", "0", "1000000000"] {
            let toml = format!("[matching]\nexpiry_days = {}\n", days);
            assert!(matches!(
                Settings::from_toml_str(&toml),
                Err(SettingsError::InvalidExpiry { .. })
            ));
        }

        let settings = Settings::from_toml_str("[matching]\nexpiry_days = 30\n").unwrap();
        let result = settings.matcher().score_pair(
            &crate::core::test_support::sponsor(),
            &crate::core::test_support::creator(),
        );
        assert!(!result.is_expired(result.created_at));
    }
}
