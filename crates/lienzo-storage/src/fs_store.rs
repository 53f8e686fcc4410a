use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use lienzo_core::domain::BlobKey;
use lienzo_core::ports::{BlobError, BlobStore};

/// Bucket emulado en disco: `<root>/<bucket>/<path>`.
///
/// Es lo que usa un servidor de desarrollo sin almacenamiento en red.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
  root: PathBuf,
}

impl FsBlobStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn physical(&self, key: &BlobKey) -> PathBuf {
    self.root.join(&key.bucket).join(key.path.to_relative_path())
  }
}

/// Una clave que resuelve a un directorio, o que pasa a través de un
/// archivo, no es un blob.
fn is_missing(kind: ErrorKind) -> bool {
  matches!(kind, ErrorKind::NotFound | ErrorKind::IsADirectory | ErrorKind::NotADirectory)
}

#[async_trait]
impl BlobStore for FsBlobStore {
  async fn get(&self, key: &BlobKey) -> Result<Vec<u8>, BlobError> {
    match tokio::fs::read(self.physical(key)).await {
      Ok(bytes) => Ok(bytes),
      Err(e) if is_missing(e.kind()) => Err(BlobError::NotFound(key.to_string())),
      Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(BlobError::Denied(key.to_string())),
      Err(e) => Err(BlobError::Io(e)),
    }
  }

  async fn put(&self, key: &BlobKey, bytes: &[u8], content_type: &str) -> Result<(), BlobError> {
    let path = self.physical(key);
    lienzo_fs::atomic_write_async(&path, bytes).await?;
    debug!(%key, content_type, bytes = bytes.len(), "blob written");
    Ok(())
  }

  async fn exists(&self, key: &BlobKey) -> Result<bool, BlobError> {
    match tokio::fs::metadata(self.physical(key)).await {
      Ok(meta) => Ok(meta.is_file()),
      Err(e) if is_missing(e.kind()) => Ok(false),
      Err(e) => Err(BlobError::Io(e)),
    }
  }
}
