use crate::domain::artist::Artist;
use crate::errors::DataLoadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Documento raíz del dataset.
///
/// Ambas claves (`artists` y `globals`) son obligatorias: si falta alguna,
/// la carga falla y no se produce un `Dataset` parcial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
  pub artists: Vec<Artist>,
  pub globals: Map<String, Value>,
}

impl Dataset {
  /// Parsea el documento JSON completo.
  pub fn from_slice(bytes: &[u8]) -> Result<Self, DataLoadError> {
    serde_json::from_slice(bytes).map_err(DataLoadError::Parse)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_artists_and_globals() {
    let raw = br#"{
      "artists": [{
        "slug": "a", "name": "A", "share_title": "paint", "bio": "x",
        "sessions": [{"slug": "s1", "enabled": true, "video": {"source": "videos/a"}}]
      }],
      "globals": {"title": "Sessions"}
    }"#;

    let ds = Dataset::from_slice(raw).unwrap();

    assert_eq!(ds.artists.len(), 1);
    assert_eq!(ds.artists[0].extra["bio"], "x");
    assert_eq!(ds.artists[0].sessions[0].field("video").unwrap()["source"], "videos/a");
    assert_eq!(ds.globals["title"], "Sessions");
  }

  #[test]
  fn missing_artists_key_is_a_load_error() {
    let err = Dataset::from_slice(br#"{"globals": {}}"#).unwrap_err();
    assert!(matches!(err, DataLoadError::Parse(_)));
  }

  #[test]
  fn missing_globals_key_is_a_load_error() {
    assert!(Dataset::from_slice(br#"{"artists": []}"#).is_err());
  }

  #[test]
  fn session_without_enabled_flag_is_rejected() {
    let raw = br#"{"artists": [{"slug": "a", "name": "A", "share_title": "t",
      "sessions": [{"slug": "s1"}]}], "globals": {}}"#;
    assert!(Dataset::from_slice(raw).is_err());
  }
}
