use crate::error::{Result, ShopError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FLOWER_FILE: &str = "flowers.dat";
const DEFAULT_ORDER_FILE: &str = "orders.dat";

/// Configuration for the shop, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// File name of the flower catalog inside the data directory
    #[serde(default = "default_flower_file")]
    pub flower_file: String,

    /// File name of the order book inside the data directory
    #[serde(default = "default_order_file")]
    pub order_file: String,
}

fn default_flower_file() -> String {
    DEFAULT_FLOWER_FILE.to_string()
}

fn default_order_file() -> String {
    DEFAULT_ORDER_FILE.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            flower_file: default_flower_file(),
            order_file: default_order_file(),
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Io)?;
        let config: ShopConfig =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.flower_file.trim().is_empty() || self.order_file.trim().is_empty() {
            return Err(ShopError::Store(
                "config.json: file names must not be empty".to_string(),
            ));
        }
        if self.flower_file == self.order_file {
            return Err(ShopError::Store(
                "config.json: flowers and orders must use different files".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.flower_file, "flowers.dat");
        assert_eq!(config.order_file, "orders.dat");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShopConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"order_file":"sales.dat"}"#).unwrap();

        let loaded = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.flower_file, "flowers.dat");
        assert_eq!(loaded.order_file, "sales.dat");
    }

    #[test]
    fn test_same_file_for_both_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"flower_file":"shop.dat","order_file":"shop.dat"}"#,
        )
        .unwrap();

        assert!(matches!(
            ShopConfig::load(dir.path()).unwrap_err(),
            ShopError::Store(_)
        ));
    }
}
