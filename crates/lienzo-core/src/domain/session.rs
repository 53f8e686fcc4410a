use crate::domain::slug::Slug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Una sesión de pintura grabada de un artista.
///
/// Las sesiones deshabilitadas se conservan en el dataset pero no aparecen
/// en listados, navegación ni búsquedas directas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
  /// Único dentro del artista propietario.
  pub slug: Slug,
  /// Marca la sesión como visible públicamente.
  pub enabled: bool,
  /// Metadatos de presentación y media (título, vídeo, miniaturas...).
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Session {
  /// Acceso a un campo de presentación arbitrario.
  pub fn field(&self, key: &str) -> Option<&Value> {
    self.extra.get(key)
  }
}
