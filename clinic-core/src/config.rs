//! Clinic configuration and the entry point that opens the appointment store.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ClinicError, ClinicResult};
use crate::repository::AppointmentRepository;
use crate::storage::{AppointmentStore, DEFAULT_STORAGE_KEY, FileStore};

static DEFAULT_DATA_DIR: &str = "~/clinic";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Global configuration at ~/.config/clinic/config.toml
///
/// Every key can be overridden with a `CLINIC_`-prefixed environment
/// variable, e.g. `CLINIC_DATA_DIR`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClinicConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        ClinicConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
        }
    }
}

impl ClinicConfig {
    pub fn config_path() -> ClinicResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClinicError::Config("Could not determine config directory".into()))?
            .join("clinic");

        Ok(config_dir.join("config.toml"))
    }

    /// Read the config file at `path` (if any), then apply environment overrides.
    pub fn load_from(path: &Path) -> ClinicResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("CLINIC"))
            .build()
            .map_err(|e| ClinicError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClinicError::Config(e.to_string()))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> ClinicResult<String> {
        toml::to_string_pretty(self).map_err(|e| ClinicError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ClinicResult<()> {
        let contents = format!(
            "\
# clinic configuration

# Where appointment data is stored:
# data_dir = \"{}\"

# Name of the storage slot holding the appointment list:
# storage_key = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_STORAGE_KEY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClinicError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClinicError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Resolved clinic settings plus the paths derived from them.
#[derive(Debug, Clone)]
pub struct Clinic {
    config: ClinicConfig,
}

impl Clinic {
    /// Load the global config, creating the default file on first run.
    pub fn load() -> ClinicResult<Self> {
        let config_path = ClinicConfig::config_path()?;

        if !config_path.exists() {
            ClinicConfig::create_default_config(&config_path)?;
            tracing::info!(path = %config_path.display(), "created default config");
        }

        Ok(Clinic::from_config(ClinicConfig::load_from(&config_path)?))
    }

    pub fn from_config(config: ClinicConfig) -> Self {
        Clinic { config }
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.data_path())
    }

    /// Path of the file holding the serialized appointment list.
    pub fn storage_path(&self) -> PathBuf {
        self.file_store().path_for(&self.config.storage_key)
    }

    pub fn open_repository(&self) -> AppointmentRepository<FileStore> {
        let store = AppointmentStore::with_key(self.file_store(), &self.config.storage_key);
        AppointmentRepository::open(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClinicConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        ClinicConfig::create_default_config(&path).unwrap();
        let config = ClinicConfig::load_from(&path).unwrap();

        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            format!(
                "data_dir = \"{}\"\nstorage_key = \"front_desk\"\n",
                dir.path().join("data").display()
            ),
        )
        .unwrap();

        let config = ClinicConfig::load_from(&path).unwrap();
        assert_eq!(config.storage_key, "front_desk");

        let clinic = Clinic::from_config(config);
        assert_eq!(clinic.storage_path(), dir.path().join("data/front_desk.json"));
    }

    #[test]
    fn open_repository_uses_configured_slot() {
        let dir = tempfile::tempdir().unwrap();
        let clinic = Clinic::from_config(ClinicConfig {
            data_dir: dir.path().to_path_buf(),
            storage_key: "desk".to_string(),
        });

        let mut repo = clinic.open_repository();
        repo.insert(crate::appointment::tests::make_draft("Ann", "Bob", "2023-01-10"))
            .unwrap();

        assert!(dir.path().join("desk.json").exists());
        assert_eq!(clinic.open_repository().len(), 1);
    }

    #[test]
    fn config_renders_as_toml() {
        let toml = ClinicConfig::default().to_toml().unwrap();
        assert!(toml.contains("storage_key = \"clinic_appointments\""));
    }
}
