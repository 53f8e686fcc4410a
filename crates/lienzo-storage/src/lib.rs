pub mod fs_store;
pub mod http_store;

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use lienzo_config::{BlobBackendKind, ProjectPaths, StorageConfig};
use lienzo_core::domain::BlobKey;
use lienzo_core::ports::{BlobError, BlobStore};

pub use fs_store::FsBlobStore;
pub use http_store::HttpBlobStore;

/// Blob store elegido por configuración (`[storage].backend`).
#[derive(Debug, Clone)]
pub enum ConfiguredBlobStore {
  Fs(FsBlobStore),
  Http(HttpBlobStore),
}

impl ConfiguredBlobStore {
  pub fn from_config(cfg: &StorageConfig, paths: &ProjectPaths) -> Result<Self, BlobError> {
    match cfg.backend {
      BlobBackendKind::Fs => {
        let root = cfg.blob_root.clone().unwrap_or_else(|| paths.blob_dir());
        info!(root = %root.display(), bucket = %cfg.bucket, "using on-disk blob store");
        Ok(Self::Fs(FsBlobStore::new(root)))
      }
      BlobBackendKind::Http => {
        let token = cfg.token_env.as_deref().and_then(|var| std::env::var(var).ok());
        info!(endpoint = %cfg.endpoint, bucket = %cfg.bucket, auth = token.is_some(), "using http blob store");
        let store = HttpBlobStore::new(cfg.endpoint.clone(), token, Duration::from_secs(cfg.timeout_secs))?;
        Ok(Self::Http(store))
      }
    }
  }
}

#[async_trait]
impl BlobStore for ConfiguredBlobStore {
  async fn get(&self, key: &BlobKey) -> Result<Vec<u8>, BlobError> {
    match self {
      Self::Fs(s) => s.get(key).await,
      Self::Http(s) => s.get(key).await,
    }
  }

  async fn put(&self, key: &BlobKey, bytes: &[u8], content_type: &str) -> Result<(), BlobError> {
    match self {
      Self::Fs(s) => s.put(key, bytes, content_type).await,
      Self::Http(s) => s.put(key, bytes, content_type).await,
    }
  }

  async fn exists(&self, key: &BlobKey) -> Result<bool, BlobError> {
    match self {
      Self::Fs(s) => s.exists(key).await,
      Self::Http(s) => s.exists(key).await,
    }
  }
}
