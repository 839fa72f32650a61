// S3-backed object store

use anyhow::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::{ObjectStore, StoreError};
use crate::config::StorageConfig;

pub struct S3Store {
    client: Client,
    bucket: String,
    region: String,
}

impl S3Store {
    /// Builds a client from the environment credential chain plus the
    /// configured region and bucket.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Ok(Self {
            client: Client::new(&sdk_config),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<String, StoreError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StoreError::Put(e.to_string()))?;

        tracing::info!(key, size, bucket = %self.bucket, "object stored");
        Ok(self.public_url(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn public_url_embeds_bucket_region_and_key() {
        let store = S3Store::new(&StorageConfig {
            region: "eu-west-1".to_string(),
            bucket: "my-bucket".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(
            store.public_url("123-logo.png"),
            "https://my-bucket.s3.eu-west-1.amazonaws.com/123-logo.png"
        );
    }
}
