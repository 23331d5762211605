//! Insight thresholds and dashboard settings
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path (`--config`), if it exists
//! 2. Override in data dir (~/.local/share/spendwise/config/insights.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/insights.toml");

/// Thresholds used by the insight rules and the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// A budget past this percentage (and not over) gets a warning
    pub near_limit_percent: f64,
    /// Transactions above this amount are notable
    pub large_transaction_amount: f64,
    /// Length of the dashboard's recent transactions list
    pub recent_transactions: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            near_limit_percent: 80.0,
            large_transaction_amount: 100.0,
            recent_transactions: 5,
        }
    }
}

impl InsightConfig {
    /// Load configuration (explicit path, then data-dir override, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        let content = match path {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading insight config");
                fs::read_to_string(&path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        Self::parse(&content)
    }

    /// Parse config from TOML content; missing keys keep their defaults
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(insights) = raw.insights {
            if let Some(percent) = insights.near_limit_percent {
                config.near_limit_percent = percent;
            }
            if let Some(amount) = insights.large_transaction_amount {
                config.large_transaction_amount = amount;
            }
        }

        if let Some(dashboard) = raw.dashboard {
            if let Some(recent) = dashboard.recent_transactions {
                config.recent_transactions = recent;
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("near_limit_percent", self.near_limit_percent),
            ("large_transaction_amount", self.large_transaction_amount),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendwise").join("config").join("insights.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    insights: Option<RawInsights>,
    dashboard: Option<RawDashboard>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    near_limit_percent: Option<f64>,
    large_transaction_amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawDashboard {
    recent_transactions: Option<usize>,
}
