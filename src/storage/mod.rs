// Storage module for S3/MinIO integration

use async_trait::async_trait;

pub mod s3_client;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("object storage put failed: {0}")]
    Put(String),
}

/// Durable binary storage addressed by key. The production implementation
/// is [`s3_client::S3Store`]; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `bytes` under `key` and returns a publicly addressable URL.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<String, StoreError>;
}
