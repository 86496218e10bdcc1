//! In-memory backend with JSON file persistence.

use std::any::Any;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::backend::{Backend, errors::BackendError};
use crate::Result;

/// A simple in-memory backend implementation using a `HashMap` for storage.
///
/// This is the `localStorage` analog: a flat string-to-string map. It is
/// suitable for testing, for embedding, and for single-user deployments where
/// the whole state fits comfortably in memory.
///
/// It provides basic persistence via [`Memory::save_to_file`] and
/// [`Memory::load_from_file`], serializing the map to JSON. Concurrent
/// writers from two processes sharing one persistence file are
/// last-writer-wins.
#[derive(Debug, Default)]
pub struct Memory {
    values: RwLock<HashMap<String, String>>,
}

/// Serializable mirror of [`Memory`] for persistence.
#[derive(Serialize, Deserialize)]
struct SerializableMemory {
    values: HashMap<String, String>,
}

impl Serialize for Memory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let values = self.values.read().unwrap().clone();
        SerializableMemory { values }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Memory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serializable = SerializableMemory::deserialize(deserializer)?;
        Ok(Memory {
            values: RwLock::new(serializable.values),
        })
    }
}

impl Memory {
    /// Create a new, empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the entire backend state to a specified file as pretty JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BackendError::SerializationFailed { source: e })?;
        fs::write(path, json).map_err(BackendError::from)?;
        Ok(())
    }

    /// Loads backend state from a specified JSON file.
    ///
    /// If the file does not exist, a new, empty backend is returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let backend: Memory = serde_json::from_str(&json)
                    .map_err(|e| BackendError::DeserializationFailed { source: e })?;
                Ok(backend)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Memory::new()),
            Err(e) => Err(BackendError::from(e).into()),
        }
    }
}

impl Backend for Memory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().unwrap().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.read().unwrap().keys().cloned().collect())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
