//! Catalog persistence: the full project list serialized as one JSON file.
//!
//! Every append rewrites the whole file (O(n) per upload). Mutations are
//! serialized through an in-process mutex and land via a temp-file rename,
//! so a failed write leaves the previous content intact and readers never
//! observe a half-written file.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::models::Project;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("catalog read/write failed: {0}")]
    Persistence(#[from] std::io::Error),
}

pub struct CatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns all records in insertion order. A missing backing file is an
    /// empty catalog; a file that exists but does not parse propagates as
    /// `Corrupt` rather than being masked as empty.
    pub async fn list(&self) -> Result<Vec<Project>, CatalogError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(CatalogError::Corrupt),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(CatalogError::Persistence(e)),
        }
    }

    /// Appends one record: read the full catalog, push, rewrite the file.
    /// The write goes to a sibling temp file first and is renamed into
    /// place, so either the old or the new catalog is on disk, never a
    /// partial one.
    pub async fn append(&self, project: Project) -> Result<(), CatalogError> {
        let _guard = self.write_lock.lock().await;

        let mut projects = self.list().await?;
        projects.push(project);

        // Pretty-printed to stay hand-inspectable.
        let serialized = serde_json::to_vec_pretty(&projects).map_err(CatalogError::Corrupt)?;

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, &serialized).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            // Don't leave the temp file behind on a failed rename.
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(CatalogError::Persistence(e));
        }

        tracing::debug!(
            count = projects.len(),
            path = %self.path.display(),
            "catalog rewritten"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_owned();
        os.push(".tmp");
        PathBuf::from(os)
    }
}
