//! JSON file storage service implementation
//!
//! Persists the score collection as a single pretty-printed JSON array.
//! Writes go through a temporary sibling file that is renamed over the
//! target, so readers see either the old or the new collection.

use async_trait::async_trait;
use shared::{ScoreEntry, app_debug};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::ScoreStorage;

/// File-backed score storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "highscores.json".into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn write_error(&self, source: std::io::Error) -> WebServerError {
        WebServerError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ScoreStorage for JsonFileStorage {
    async fn read_scores(&self) -> WebServerResult<Option<Vec<ScoreEntry>>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                app_debug!("No score file at {}, nothing persisted yet", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(WebServerError::StorageRead {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let scores: Vec<ScoreEntry> =
            serde_json::from_str(&content).map_err(|e| WebServerError::CorruptStorage {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(Some(scores))
    }

    async fn write_scores(&self, scores: &[ScoreEntry]) -> WebServerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| self.write_error(e))?;
        }

        let content = serde_json::to_string_pretty(scores)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, content).await.map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(self.write_error(e));
        }

        app_debug!("💾 Wrote {} scores to {}", scores.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
