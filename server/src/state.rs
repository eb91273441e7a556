use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use pinmap_shared::{Dataset, LoadError};

/// Dataset resource held in memory, validated once at startup.
#[derive(Clone)]
pub struct AppState {
    pub dataset_json: Arc<Bytes>,
    pub country_count: usize,
}

impl AppState {
    pub fn from_bytes(payload: Bytes) -> Result<Self, LoadError> {
        let dataset = Dataset::from_slice(&payload)?;
        Ok(Self {
            dataset_json: Arc::new(payload),
            country_count: dataset.len(),
        })
    }

    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let payload = tokio::fs::read(path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))?;
        Self::from_bytes(Bytes::from(payload))
    }
}
