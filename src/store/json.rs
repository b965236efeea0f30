use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::store::Repository;

/// Whole-document JSON store: one file holds a key -> record mapping.
///
/// A missing or unreadable document opens as an empty mapping; `save`
/// rewrites the entire file. BTreeMap keeps listings deterministic.
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    records: BTreeMap<String, T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, T>>(&text) {
                Ok(map) => map,
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "store document unreadable, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        info!(
            path = %path.display(),
            records = records.len(),
            "store_opened"
        );
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.records.iter()
    }

    /// Persist the whole document, creating parent directories on demand.
    /// Last write wins; there is no locking.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let file = std::fs::File::create(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.records)?;
        info!(
            path = %self.path.display(),
            records = self.records.len(),
            "store_saved"
        );
        Ok(())
    }
}

impl<T> Repository<T> for JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    fn get(&self, key: &str) -> Result<Option<T>> {
        Ok(self.records.get(key).cloned())
    }

    fn upsert(&mut self, key: &str, value: T) -> Result<()> {
        self.records.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        Ok(self.records.remove(key).is_some())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }
}
