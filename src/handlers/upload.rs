use axum::extract::{Multipart, State};
use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::Project;
use crate::AppState;

/// Transient on-disk copy of the uploaded bytes. Removal happens on drop,
/// so every exit path through the handler cleans up, success or failure.
struct SpooledUpload {
    path: PathBuf,
}

impl SpooledUpload {
    async fn write(dir: &Path, data: &[u8]) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(Uuid::new_v4().to_string());
        tokio::fs::write(&path, data).await?;
        Ok(Self { path })
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

impl Drop for SpooledUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove spooled upload"
            );
        }
    }
}

/// Handle one project upload: spool the file part locally, relay it to the
/// object store, append the metadata record to the catalog.
///
/// Object storage and the catalog append are sequential, not atomic with
/// each other: a failed append leaves an orphaned object in the bucket.
pub async fn upload_project(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, ApiError> {
    let mut title = String::new();
    let mut description = String::new();
    let mut filename = String::new();
    let mut spooled: Option<SpooledUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                filename = field.file_name().unwrap_or("unknown").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read file part: {e}")))?;
                spooled = Some(SpooledUpload::write(&state.upload_dir, &data).await?);
            }
            "title" => {
                title = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read title: {e}")))?;
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read description: {e}")))?;
            }
            _ => {}
        }
    }

    let spooled = spooled.ok_or_else(|| ApiError::BadRequest("missing file".to_string()))?;

    // Relay whatever landed in the spool file, not the in-flight buffer.
    let data = spooled.read().await?;

    let timestamp = Utc::now().timestamp_millis();
    let key = format!("{timestamp}-{filename}");
    let url = state.store.put(&key, data).await?;

    let project = Project {
        id: timestamp,
        title: title.clone(),
        description,
        url,
    };
    state.catalog.append(project).await?;

    tracing::info!(key = %key, title = %title, "project uploaded");
    Ok(format!("Project \"{title}\" uploaded successfully!"))
}
