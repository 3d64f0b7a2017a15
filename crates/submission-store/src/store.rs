//! Flag store implementations.

use crate::error::StoreError;
use crate::types::SubmissionReceipt;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Storage capability for the "already registered" marker.
///
/// Injected into the registration controller so tests can substitute an
/// in-memory fake. The marker is written only on a successful submission
/// and is never cleared by the application.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Read the stored receipt, if any.
    async fn load(&self) -> Result<Option<SubmissionReceipt>, StoreError>;

    /// Persist the receipt. Last write wins.
    async fn save(&self, receipt: &SubmissionReceipt) -> Result<(), StoreError>;
}

/// File-backed flag store, durable across process restarts.
///
/// One JSON file at the configured path. A missing file means the client
/// has not registered yet.
#[derive(Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FlagStore for FileFlagStore {
    async fn load(&self) -> Result<Option<SubmissionReceipt>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No submission flag at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let receipt = serde_json::from_slice(&bytes)?;
        Ok(Some(receipt))
    }

    async fn save(&self, receipt: &SubmissionReceipt) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(receipt)?;
        tokio::fs::write(&self.path, json).await?;

        info!("Submission flag written to {}", self.path.display());
        Ok(())
    }
}

/// In-memory flag store for tests and dry runs.
#[derive(Clone, Default)]
pub struct MemoryFlagStore {
    receipt: Arc<RwLock<Option<SubmissionReceipt>>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn load(&self) -> Result<Option<SubmissionReceipt>, StoreError> {
        Ok(self.receipt.read().await.clone())
    }

    async fn save(&self, receipt: &SubmissionReceipt) -> Result<(), StoreError> {
        *self.receipt.write().await = Some(receipt.clone());
        Ok(())
    }
}
