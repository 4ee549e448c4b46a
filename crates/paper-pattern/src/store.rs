//! User-saved templates
//!
//! A store is an ordered list of complete configurations. Saving appends,
//! deleting removes by id, and every access reloads the whole list. No
//! locking across processes: the last writer wins.

use crate::config::{PaperConfig, fresh_id};
use crate::constants::SAVED_TEMPLATES_FILE;
use crate::types::{PaperError, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub trait TemplateStore {
    /// All saved templates in save order
    fn list(&self) -> impl Future<Output = Result<Vec<PaperConfig>>> + Send;

    fn append(&self, config: PaperConfig) -> impl Future<Output = Result<()>> + Send;

    /// Remove the template with `id`, returning whether one was removed
    fn remove(&self, id: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Save `config` under a new `saved-<millis>` id and the trimmed `name`
pub async fn save_template<S: TemplateStore>(
    store: &S,
    config: &PaperConfig,
    name: &str,
) -> Result<PaperConfig> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PaperError::Store("Template name is empty".to_string()));
    }

    let saved = PaperConfig {
        id: fresh_id("saved"),
        name: name.to_string(),
        ..config.clone()
    };
    store.append(saved.clone()).await?;
    log::info!("Saved template '{}' as {}", saved.name, saved.id);
    Ok(saved)
}

/// In-process store, mostly for tests and the runtime's default
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<PaperConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for MemoryStore {
    async fn list(&self) -> Result<Vec<PaperConfig>> {
        Ok(self.entries.lock().await.clone())
    }

    async fn append(&self, config: PaperConfig) -> Result<()> {
        self.entries.lock().await.push(config);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|c| c.id != id);
        Ok(entries.len() != before)
    }
}

/// Store backed by a single JSON array file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store using the default file name inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SAVED_TEMPLATES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<PaperConfig>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PaperError::Store(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| {
            PaperError::Store(format!(
                "Saved templates in {} are corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_all(&self, entries: &[PaperConfig]) -> Result<()> {
        let json = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            PaperError::Store(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl TemplateStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<PaperConfig>> {
        self.read_all().await
    }

    async fn append(&self, config: PaperConfig) -> Result<()> {
        let mut entries = self.read_all().await?;
        entries.push(config);
        self.write_all(&entries).await
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        let mut entries = self.read_all().await?;
        let before = entries.len();
        entries.retain(|c| c.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write_all(&entries).await?;
        Ok(true)
    }
}
