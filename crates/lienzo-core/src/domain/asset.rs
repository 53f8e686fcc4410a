use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAssetPath {
  #[error("empty asset path")]
  Empty,
  #[error("asset path escapes its root: {0}")]
  Traversal(String),
}

/// `C:` o `c:algo`. Unido a un `PathBuf` en Windows reemplaza la ruta base,
/// en cualquier posición.
fn is_drive_prefix(segment: &str) -> bool {
  let bytes = segment.as_bytes();
  bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Ruta relativa de un asset (`videos/artista/1024_848/video.mp4`).
///
/// Siempre normalizada: segmentos separados por `/`, sin `.` ni `..`, sin
/// barra inicial ni final. Segura para unir a cualquier directorio raíz.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
  pub fn parse(raw: &str) -> Result<Self, InvalidAssetPath> {
    let mut segments = Vec::new();

    for seg in raw.split(['/', '\\']) {
      match seg {
        "" | "." => continue,
        ".." => return Err(InvalidAssetPath::Traversal(raw.to_owned())),
        s if is_drive_prefix(s) => return Err(InvalidAssetPath::Traversal(raw.to_owned())),
        s => segments.push(s),
      }
    }

    if segments.is_empty() {
      return Err(InvalidAssetPath::Empty);
    }
    Ok(AssetPath(segments.join("/")))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Ruta relativa con los separadores de la plataforma.
  pub fn to_relative_path(&self) -> PathBuf {
    self.0.split('/').collect()
  }

  /// Tipo MIME deducido de la extensión.
  pub fn content_type(&self) -> &'static str {
    let ext = Path::new(&self.0).extension().and_then(|e| e.to_str()).unwrap_or_default();

    match ext.to_ascii_lowercase().as_str() {
      "mp4" => "video/mp4",
      "webm" => "video/webm",
      "jpg" | "jpeg" => "image/jpeg",
      "png" => "image/png",
      "json" => "application/json",
      _ => "application/octet-stream",
    }
  }
}

impl fmt::Display for AssetPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Clave en el blob store: bucket fijo + ruta del asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobKey {
  pub bucket: String,
  pub path: AssetPath,
}

impl BlobKey {
  pub fn new(bucket: impl Into<String>, path: AssetPath) -> Self {
    Self { bucket: bucket.into(), path }
  }
}

// Formato `/{bucket}/{path}`, el mismo que usa el almacenamiento remoto.
impl fmt::Display for BlobKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}/{}", self.bucket, self.path)
  }
}

/// Asset resuelto, listo para enviarse al cliente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
  pub key: BlobKey,
  pub content_type: &'static str,
  pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalises_slashes() {
    let p = AssetPath::parse("/videos//a/./video.mp4/").unwrap();
    assert_eq!(p.as_str(), "videos/a/video.mp4");
  }

  #[test]
  fn rejects_parent_segments_and_empty_paths() {
    assert!(matches!(AssetPath::parse("videos/../../etc/passwd"), Err(InvalidAssetPath::Traversal(_))));
    assert!(matches!(AssetPath::parse("C:/windows"), Err(InvalidAssetPath::Traversal(_))));
    assert_eq!(AssetPath::parse("//"), Err(InvalidAssetPath::Empty));
  }

  #[test]
  fn colons_are_allowed_outside_drive_prefixes() {
    assert_eq!(AssetPath::parse("videos/clip:1.mp4").unwrap().as_str(), "videos/clip:1.mp4");
    assert_eq!(AssetPath::parse("ab:c.mp4").unwrap().as_str(), "ab:c.mp4");
    assert!(matches!(AssetPath::parse("videos/c:clip.mp4"), Err(InvalidAssetPath::Traversal(_))));
  }

  #[test]
  fn blob_key_includes_bucket() {
    let key = BlobKey::new("udon-media", AssetPath::parse("videos/a.webm").unwrap());
    assert_eq!(key.to_string(), "/udon-media/videos/a.webm");
    assert_eq!(key.path.content_type(), "video/webm");
  }

  #[test]
  fn unknown_extension_is_octet_stream() {
    assert_eq!(AssetPath::parse("blob").unwrap().content_type(), "application/octet-stream");
    assert_eq!(AssetPath::parse("a/VIDEO.MP4").unwrap().content_type(), "video/mp4");
  }
}
