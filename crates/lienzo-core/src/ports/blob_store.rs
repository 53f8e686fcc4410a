use async_trait::async_trait;

use crate::domain::asset::BlobKey;

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
  /// La clave no existe. Es la única condición que distingue el resolver.
  #[error("blob not found: {0}")]
  NotFound(String),

  #[error("access denied: {0}")]
  Denied(String),

  #[error("store unavailable: {0}")]
  Unavailable(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl BlobError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, BlobError::NotFound(_))
  }
}

/// Port del almacenamiento primario de assets (bucket remoto).
///
/// Implementaciones posibles:
/// - directorio local por bucket (servidores de desarrollo)
/// - object store HTTP (producción)
///
/// `put` de la misma clave desde varias tareas a la vez debe ser seguro:
/// gana la última escritura.
#[async_trait]
pub trait BlobStore: Send + Sync {
  async fn get(&self, key: &BlobKey) -> Result<Vec<u8>, BlobError>;

  async fn put(&self, key: &BlobKey, bytes: &[u8], content_type: &str) -> Result<(), BlobError>;

  async fn exists(&self, key: &BlobKey) -> Result<bool, BlobError>;
}
