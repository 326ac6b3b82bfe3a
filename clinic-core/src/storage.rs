//! Persistence of the appointment list in a single key-value slot.
//!
//! The whole list is read once and written back wholesale after every
//! mutation. A missing or corrupt blob loads as an empty list.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::appointment::Appointment;
use crate::error::{ClinicError, ClinicResult};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "clinic_appointments";

/// A string-to-string slot store, like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> ClinicResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> ClinicResult<()>;
}

/// Stores each key as `<key>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ClinicResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    /// Write through a temp file in the same directory, then rename it into place.
    fn set(&mut self, key: &str, value: &str) -> ClinicResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(self.path_for(key))
            .map_err(|e| ClinicError::Io(e.error))?;

        Ok(())
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ClinicResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ClinicResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the serialized appointment list under one key.
#[derive(Debug, Clone)]
pub struct AppointmentStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> AppointmentStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        AppointmentStore {
            store,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the persisted list. Never fails: absent, unreadable or
    /// unparseable state all come back as an empty list.
    pub fn load(&self) -> Vec<Appointment> {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not read appointments, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Appointment>>(&blob) {
            Ok(appointments) => {
                tracing::debug!(key = %self.key, count = appointments.len(), "loaded appointments");
                appointments
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding corrupt appointment data");
                Vec::new()
            }
        }
    }

    /// Serialize and persist the full list in a single write.
    pub fn save(&mut self, appointments: &[Appointment]) -> ClinicResult<()> {
        let blob = serde_json::to_string(appointments)
            .map_err(|e| ClinicError::Serialization(e.to_string()))?;
        self.store.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = appointments.len(), "saved appointments");
        Ok(())
    }
}
