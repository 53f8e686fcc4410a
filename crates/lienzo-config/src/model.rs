use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::backend::{ConfigBackend, TomlConfigBackend};
use crate::paths::ConfigError;
use crate::CONFIG_BACKEND;

/// Sección `[site]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
  /// Modo desarrollo: dataset releído en cada petición y fallback a la
  /// caché local de vídeos.
  pub debug: bool,
  pub site_url: String,
  /// Segundos de `Cache-Control: max-age` para las páginas públicas.
  pub cache_timeout: u32,
}

impl Default for SiteConfig {
  fn default() -> Self {
    SiteConfig {
      debug: false,
      site_url: "https://virtualart.chromeexperiments.com".into(),
      cache_timeout: 61,
    }
  }
}

impl SiteConfig {
  pub fn load() -> Result<Self, ConfigError> {
    CONFIG_BACKEND.load_section_with_default("site")
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    backend.load_section_with_default("site")
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("site", self)
  }

  /// URL absoluta para una ruta de la petición.
  pub fn full_url(&self, path: &str) -> String {
    format!("{}/{}", self.site_url.trim_end_matches('/'), path.trim_start_matches('/'))
  }

  /// Cabecera `Cache-Control` de las páginas públicas. En debug no se cachea.
  pub fn cache_control(&self) -> String {
    let max_age = if self.debug { 0 } else { self.cache_timeout };
    format!("public, max-age={max_age}")
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobBackendKind {
  /// Bucket emulado en un directorio local.
  Fs,
  /// Object store accesible por HTTP.
  Http,
}

/// Sección `[storage]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
  pub bucket: String,
  pub backend: BlobBackendKind,
  /// Base del object store (`backend = "http"`).
  pub endpoint: String,
  /// Variable de entorno con el bearer token, si el bucket lo requiere.
  pub token_env: Option<String>,
  /// Raíz del bucket emulado (`backend = "fs"`); por defecto bajo el
  /// directorio de datos.
  pub blob_root: Option<PathBuf>,
  pub timeout_secs: u64,
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig {
      bucket: "udon-media-usa".into(),
      backend: BlobBackendKind::Fs,
      endpoint: "https://storage.googleapis.com".into(),
      token_env: None,
      blob_root: None,
      timeout_secs: 30,
    }
  }
}

impl StorageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    CONFIG_BACKEND.load_section_with_default("storage")
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    backend.load_section_with_default("storage")
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("storage", self)
  }
}
