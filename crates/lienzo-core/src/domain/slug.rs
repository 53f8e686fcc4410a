use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identificador legible usado en las URLs (`/artists/{slug}/`).
///
/// Es único entre los artistas del dataset, o entre las sesiones de un mismo
/// artista. No se valida el formato: el dataset es la fuente de verdad.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
  pub fn new(value: impl Into<String>) -> Self {
    Slug(value.into())
  }

  /// Devuelve el slug como `&str`.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for Slug {
  fn from(s: &str) -> Self {
    Slug(s.to_owned())
  }
}

impl From<String> for Slug {
  fn from(s: String) -> Self {
    Slug(s)
  }
}

impl From<Slug> for String {
  fn from(slug: Slug) -> Self {
    slug.0
  }
}

// Permite buscar en `HashMap<Slug, _>` con un `&str`.
impl Borrow<str> for Slug {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for Slug {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl PartialEq<str> for Slug {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for Slug {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}

impl fmt::Display for Slug {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
