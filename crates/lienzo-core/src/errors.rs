use thiserror::Error;

use crate::domain::asset::InvalidAssetPath;
use crate::domain::slug::Slug;
use crate::ports::blob_store::BlobError;

/// Fallo al cargar el documento del dataset.
///
/// Es fatal para cualquier operación que necesite el dataset; no se reintenta.
#[derive(Debug, Error)]
pub enum DataLoadError {
  #[error("dataset source not found: {0}")]
  Missing(String),

  #[error("could not read dataset source {location}: {source}")]
  Io { location: String, source: std::io::Error },

  #[error("malformed dataset: {0}")]
  Parse(serde_json::Error),

  #[error("duplicate artist slug `{0}`")]
  DuplicateArtist(Slug),

  #[error("duplicate session slug `{session}` in artist `{artist}`")]
  DuplicateSession { artist: Slug, session: Slug },
}

/// Qué entidad falta y por qué.
///
/// Los llamadores que solo necesitan saber "no existe" pueden ignorar el
/// detalle; el motivo queda disponible para logs o para decidir una redirección.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
  #[error("artist `{0}`")]
  Artist(Slug),

  #[error("session `{session}` of artist `{artist}`")]
  Session { artist: Slug, session: Slug },

  #[error("session `{session}` of artist `{artist}` is disabled")]
  SessionDisabled { artist: Slug, session: Slug },

  #[error("artist `{0}` has no enabled sessions")]
  NoEnabledSessions(Slug),
}

/// Error genérico del repositorio de contenido.
///
/// Las capas superiores (HTTP, CLI) deberían mapearlo a una página 404,
/// una redirección o un fallo de arranque.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error(transparent)]
  DataLoad(#[from] DataLoadError),

  #[error("not found: {0}")]
  NotFound(#[from] NotFound),
}

impl CoreError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, CoreError::NotFound(_))
  }
}

/// Fallo al resolver un asset.
#[derive(Debug, Error)]
pub enum ResolutionError {
  #[error("asset not found: {0}")]
  NotFound(String),

  #[error("invalid asset path: {0}")]
  InvalidPath(#[from] InvalidAssetPath),

  /// Fallo del blob store distinto de "no encontrado". Nunca activa el
  /// fallback local.
  #[error("blob store error: {0}")]
  Store(#[from] BlobError),

  #[error("local cache error: {0}")]
  LocalCache(#[from] std::io::Error),
}

impl ResolutionError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, ResolutionError::NotFound(_))
  }
}
