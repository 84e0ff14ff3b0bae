use std::path::PathBuf;

use anyhow::Context as _;

use crate::domain::repository::AttachmentStore;
use crate::error::ListingsServiceError;

/// Writes attachment bodies under a local directory served at `/media`.
#[derive(Clone)]
pub struct DiskAttachmentStore {
    pub root: PathBuf,
}

impl AttachmentStore for DiskAttachmentStore {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, ListingsServiceError> {
        let path = self.root.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("write attachment {}", path.display()))
            .map_err(ListingsServiceError::StorageWriteFailure)?;
        Ok(format!("/media/{filename}"))
    }
}
