//! Layout store writing JSON documents into a directory.
//!
//! `draft.json` holds the working draft, `published.json` the live layout.
//! Writes go to a temporary file first and are renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_composer_core::error::{CoreError, CoreResult};
use storefront_composer_core::traits::LayoutStore;
use storefront_composer_core::types::Section;

pub const DRAFT_FILE: &str = "draft.json";
pub const PUBLISHED_FILE: &str = "published.json";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDocumentRef<'a> {
    saved_at: DateTime<Utc>,
    sections: &'a [Section],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDocument {
    #[serde(default)]
    sections: Vec<Section>,
}

/// Directory-backed layout store
pub struct JsonLayoutStore {
    dir: PathBuf,
}

impl JsonLayoutStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the published layout, if any
    pub async fn load_published(&self) -> CoreResult<Option<Vec<Section>>> {
        self.read(PUBLISHED_FILE).await
    }

    async fn write(&self, file: &str, sections: &[Section]) -> CoreResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;

        let document = LayoutDocumentRef {
            saved_at: Utc::now(),
            sections,
        };
        let json = serde_json::to_string_pretty(&document)?;

        let target = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &target).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to replace {}: {e}", target.display()))
        })?;
        log::debug!("Wrote {} sections to {}", sections.len(), target.display());
        Ok(())
    }

    async fn read(&self, file: &str) -> CoreResult<Option<Vec<Section>>> {
        let path = self.dir.join(file);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        let document: LayoutDocument = serde_json::from_str(&json)?;
        Ok(Some(document.sections))
    }
}

#[async_trait]
impl LayoutStore for JsonLayoutStore {
    async fn save_draft(&self, sections: &[Section]) -> CoreResult<()> {
        self.write(DRAFT_FILE, sections).await
    }

    async fn publish(&self, sections: &[Section]) -> CoreResult<()> {
        self.write(PUBLISHED_FILE, sections).await
    }

    async fn load_draft(&self) -> CoreResult<Option<Vec<Section>>> {
        self.read(DRAFT_FILE).await
    }
}
