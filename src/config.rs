//! Configuration file handling.
//!
//! The configuration file is stored at `$SHOPBOOK_HOME/config.json` and
//! holds the one true configuration constant of the system: the initial
//! capital, fixed when the data directory is initialized. The two CSV data
//! files live alongside it.

use crate::{utils, Amount, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "shopbook";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const INVENTORY_CSV: &str = "inventory.csv";
const TRANSACTIONS_CSV: &str = "transactions.csv";

/// The `Config` object represents an initialized data directory. You
/// instantiate it by providing the path to `$SHOPBOOK_HOME`, and from there
/// it loads `config.json` and knows where the data files live.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the data directory and writes an initial `config.json` with
    /// the given initial capital.
    ///
    /// # Errors
    /// Returns an error if the directory is already initialized or if any
    /// file operation fails.
    pub fn create(dir: impl Into<PathBuf>, initial_capital: Amount) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative).context("Unable to create the shopbook home directory")?;
        let root = utils::canonicalize(&maybe_relative)?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.is_file() {
            bail!(
                "'{}' is already initialized, refusing to overwrite it",
                config_path.display()
            );
        }

        let config_file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            initial_capital,
        };
        config_file.save(&config_path)?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// Validates that the home directory and config file exist, then loads
    /// the configuration.
    pub fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative).context("Shopbook home is missing")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!(
                "The config file is missing '{}', run 'shopbook init' first",
                config_path.display()
            )
        }
        let config_file = ConfigFile::load(&config_path)?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn initial_capital(&self) -> Amount {
        self.config_file.initial_capital
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.root.join(INVENTORY_CSV)
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.root.join(TRANSACTIONS_CSV)
    }
}

/// The serialization format of `config.json`.
///
/// Example:
/// ```json
/// {
///   "app_name": "shopbook",
///   "config_version": 1,
///   "initial_capital": "20000"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "shopbook".
    app_name: String,

    /// Configuration file version.
    config_version: u8,

    /// The capital the business started with. Net capital and capital
    /// variation are computed against this value.
    initial_capital: Amount,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let content = utils::read(path)?;
        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(path, data).context("Unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_then_load() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("shopbook_home");

        let created = Config::create(&home, Amount::from(20000)).unwrap();
        assert_eq!(created.initial_capital(), Amount::from(20000));
        assert!(created.config_path().is_file());

        let loaded = Config::load(&home).unwrap();
        assert_eq!(loaded.initial_capital(), Amount::from(20000));
        assert_eq!(loaded.inventory_path(), loaded.root().join("inventory.csv"));
        assert_eq!(
            loaded.transactions_path(),
            loaded.root().join("transactions.csv")
        );
    }

    #[test]
    fn test_create_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        Config::create(&home, Amount::from(100)).unwrap();
        assert!(Config::create(&home, Amount::from(200)).is_err());
    }

    #[test]
    fn test_load_without_init_fails() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("config file is missing"));
    }

    #[test]
    fn test_load_rejects_wrong_app_name() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "app_name": "other_app",
            "config_version": 1,
            "initial_capital": "100"
        }"#;
        std::fs::write(dir.path().join("config.json"), json).unwrap();

        let result = Config::load(dir.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid app_name"));
    }
}
