//! Application configuration.
//!
//! The console only needs a handful of inputs:
//! - The earnings statistics to display (supplied by the platform in a real
//!   deployment; read from config here)
//! - The starting cashout balance
//! - The simulated processing delay
//! - An optional payout-method catalog override
//!
//! Loaded once at startup and immutable for the session.

use cashout::{CatalogError, PayoutCatalog, PayoutMethod};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Earning statistics shown on the overview screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsStats {
    /// Lifetime earnings in NLOV.
    pub total_earned: f64,
    /// Current earning rate in NLOV per day.
    pub daily_rate: f64,
    /// Node uptime percentage (0-100).
    pub uptime: f64,
    /// Hours until the next scheduled payout.
    pub next_payout_hours: f64,
}

impl Default for EarningsStats {
    fn default() -> Self {
        Self {
            total_earned: 1250.5,
            daily_rate: 48.2,
            uptime: 97.5,
            next_payout_hours: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Balance available for cashout at startup, in NLOV.
    #[serde(default = "default_starting_balance")]
    pub starting_balance: f64,

    /// Duration of the simulated cashout processing step, in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    #[serde(default)]
    pub stats: EarningsStats,

    /// Overrides the built-in payout catalog when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_methods: Option<Vec<PayoutMethod>>,
}

fn default_starting_balance() -> f64 {
    1250.5
}

fn default_processing_delay_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            processing_delay_ms: default_processing_delay_ms(),
            stats: EarningsStats::default(),
            payout_methods: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, creating a default file on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            log::info!("Loading config from: {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("Creating default config");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;
        log::info!("Config saved to: {}", config_path.display());
        Ok(())
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(ConfigError::InvalidBalance(self.starting_balance));
        }
        if !(0.0..=100.0).contains(&self.stats.uptime) {
            return Err(ConfigError::InvalidUptime(self.stats.uptime));
        }
        for v in [
            self.stats.total_earned,
            self.stats.daily_rate,
            self.stats.next_payout_hours,
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::InvalidStats(v));
            }
        }
        self.catalog().validate()?;
        Ok(())
    }

    /// The payout catalog for this session: the configured override, or the
    /// built-in defaults.
    pub fn catalog(&self) -> PayoutCatalog {
        match &self.payout_methods {
            Some(methods) => PayoutCatalog {
                methods: methods.clone(),
            },
            None => PayoutCatalog::default(),
        }
    }

    /// Get config file path.
    fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = Self::data_dir()?;
        path.push("config.toml");
        Ok(path)
    }

    /// Get base data directory.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let mut path = home;
        path.push(".nlov-earn");
        Ok(path)
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Home directory not found")]
    NoHomeDir,

    #[error("Invalid starting balance: {0}")]
    InvalidBalance(f64),

    #[error("Invalid uptime: {0} (must be between 0 and 100)")]
    InvalidUptime(f64),

    #[error("Invalid earnings statistic: {0}")]
    InvalidStats(f64),

    #[error("Invalid payout catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashout::PayoutMethodId;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.processing_delay_ms, 2000);
        assert_eq!(config.starting_balance, 1250.5);
        assert!(config.payout_methods.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_catalog_used_without_override() {
        let config = Config::default();
        assert_eq!(config.catalog(), PayoutCatalog::default());
    }

    #[test]
    fn test_catalog_override() {
        let mut methods = PayoutCatalog::default().methods;
        methods.retain(|m| m.id == PayoutMethodId::Upi);
        methods[0].max_amount = 25_000.0;

        let config = Config {
            payout_methods: Some(methods),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let catalog = config.catalog();
        assert_eq!(catalog.methods.len(), 1);
        assert_eq!(
            catalog.get(PayoutMethodId::Upi).unwrap().max_amount,
            25_000.0
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.stats.uptime = 120.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUptime(_))
        ));

        let mut config = Config::default();
        config.starting_balance = -10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBalance(_))
        ));

        let mut config = Config::default();
        config.payout_methods = Some(vec![]);
        assert!(matches!(config.validate(), Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.starting_balance, back.starting_balance);
        assert_eq!(config.stats, back.stats);
    }

    #[test]
    fn test_empty_file_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.processing_delay_ms, 2000);
        assert_eq!(config.stats, EarningsStats::default());
    }
}
