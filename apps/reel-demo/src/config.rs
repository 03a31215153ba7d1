//! Demo configuration loaded from the environment

use std::env;

use reelhouse_console::ReportFormat;
use reelhouse_domain::catalog::{CatalogConfig, ContentKind};
use thiserror::Error;

/// Errors raised while reading the demo configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            reason: reason.to_string(),
        }
    }
}

/// Runtime settings of the demo driver
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// `REELHOUSE_REPORT_FORMAT`: text | json
    pub report_format: ReportFormat,
    /// `REELHOUSE_RECOMMEND_KIND`: kind used for the final recommendation
    pub recommend_kind: ContentKind,
    /// `REELHOUSE_RECOMMEND_LIMIT`: size of the top recommendation
    pub catalog: CatalogConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            report_format: ReportFormat::Text,
            recommend_kind: ContentKind::Movie,
            catalog: CatalogConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("REELHOUSE_REPORT_FORMAT") {
            config.report_format = raw
                .parse()
                .map_err(|e| ConfigError::invalid("REELHOUSE_REPORT_FORMAT", e))?;
        }

        if let Some(raw) = lookup("REELHOUSE_RECOMMEND_KIND") {
            config.recommend_kind = raw
                .parse()
                .map_err(|e| ConfigError::invalid("REELHOUSE_RECOMMEND_KIND", e))?;
        }

        if let Some(raw) = lookup("REELHOUSE_RECOMMEND_LIMIT") {
            config.catalog.recommend_limit = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("REELHOUSE_RECOMMEND_LIMIT", e))?;
        }

        Ok(config)
    }
}
