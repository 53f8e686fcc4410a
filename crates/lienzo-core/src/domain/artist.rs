use crate::domain::session::Session;
use crate::domain::slug::Slug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Representa a un artista del dataset.
///
/// Agrupa sus sesiones en el orden declarado en el documento. El resto de
/// campos de presentación se conservan tal cual en `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista, usado en las URLs.
  pub slug: Slug,

  /// Nombre visible del artista.
  pub name: String,

  /// Fragmento usado al compartir ("paint", "sculpt"...).
  pub share_title: String,

  /// Sesiones en orden de declaración, incluidas las deshabilitadas.
  pub sessions: Vec<Session>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Artist {
  /// Sesiones habilitadas, preservando el orden declarado.
  pub fn enabled_sessions(&self) -> impl Iterator<Item = &Session> {
    self.sessions.iter().filter(|s| s.enabled)
  }
}
