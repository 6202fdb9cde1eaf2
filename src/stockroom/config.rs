use crate::error::{Result, StockError};
use crate::store::fs::DEFAULT_CATALOG_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// How prices are shown. Handed to the renderer explicitly; nothing reads
/// process locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// Put a space between the amount and the symbol
    pub symbol_spaced: bool,
    pub decimal_separator: String,
    pub grouping_separator: String,
    /// Group thousands (`1 234,50` instead of `1234,50`)
    pub grouping: bool,
    pub decimals: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::swedish()
    }
}

impl CurrencyFormat {
    /// `1 234,50 kr`
    pub fn swedish() -> Self {
        Self {
            symbol: "kr".to_string(),
            symbol_position: SymbolPosition::After,
            symbol_spaced: true,
            decimal_separator: ",".to_string(),
            grouping_separator: " ".to_string(),
            grouping: true,
            decimals: 2,
        }
    }

    /// `$1,234.50`
    #[cfg(test)]
    pub(crate) fn us_dollars() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Before,
            symbol_spaced: false,
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            grouping: true,
            decimals: 2,
        }
    }
}

/// Configuration for stockroom, stored as `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Catalog file; relative paths are taken from the working directory
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,

    #[serde(default)]
    pub currency: CurrencyFormat,
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_FILE)
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.catalog_file.as_os_str().is_empty() {
            return Err(StockError::Config("catalog_file cannot be empty".into()));
        }
        if self.currency.decimal_separator.is_empty() && self.currency.decimals > 0 {
            return Err(StockError::Config(
                "currency.decimal_separator cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// An explicit path wins over the configured one.
    pub fn catalog_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.catalog_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.catalog_file, PathBuf::from("db_products.csv"));
        assert_eq!(config.currency, CurrencyFormat::swedish());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = StockConfig::load(dir.path()).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_written_config_loads() {
        let dir = TempDir::new().unwrap();
        let config = StockConfig {
            catalog_file: PathBuf::from("shop.csv"),
            currency: CurrencyFormat::us_dollars(),
        };
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();

        let loaded = StockConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"currency": {"symbol": "SEK"}}"#,
        )
        .unwrap();

        let config = StockConfig::load(dir.path()).unwrap();
        assert_eq!(config.catalog_file, PathBuf::from("db_products.csv"));
        assert_eq!(config.currency.symbol, "SEK");
        assert_eq!(config.currency.decimal_separator, ",");
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"catalog_file": ""}"#).unwrap();
        assert!(matches!(
            StockConfig::load(dir.path()),
            Err(StockError::Config(_))
        ));

        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            StockConfig::load(dir.path()),
            Err(StockError::Serialization(_))
        ));
    }

    #[test]
    fn test_explicit_catalog_path_wins() {
        let config = StockConfig::default();
        assert_eq!(
            config.catalog_path(Some(Path::new("/tmp/other.csv"))),
            PathBuf::from("/tmp/other.csv")
        );
        assert_eq!(config.catalog_path(None), PathBuf::from("db_products.csv"));
    }
}
