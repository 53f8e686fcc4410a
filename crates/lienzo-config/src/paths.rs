use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Variable de entorno que fija la raíz del proyecto.
pub const BASE_DIR_ENV: &str = "LIENZO_BASE_DIR";

/// Rutas bien conocidas del despliegue.
///
/// El dataset y la caché de vídeos viven dentro del propio árbol del
/// proyecto; el blob store de desarrollo, en el directorio de datos del
/// usuario (salvo que se fije `LIENZO_BASE_DIR`).
#[derive(Debug, Clone)]
pub struct ProjectPaths {
  pub base_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl ProjectPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      let base = PathBuf::from(env_base);
      let data_dir = base.join(".lienzo");
      return Ok(Self { base_dir: base, data_dir });
    }

    let base_dir = std::env::current_dir()?;
    let proj_dirs = ProjectDirs::from("com", "lienzo", "lienzo").ok_or(ConfigError::Directories)?;
    Ok(Self { base_dir, data_dir: proj_dirs.data_dir().to_path_buf() })
  }

  /// Rutas ancladas a un directorio concreto (tests, herramientas).
  pub fn rooted(base: impl Into<PathBuf>) -> Self {
    let base_dir = base.into();
    let data_dir = base_dir.join(".lienzo");
    Self { base_dir, data_dir }
  }

  pub fn config_file(&self) -> PathBuf {
    self.base_dir.join("lienzo.toml")
  }

  /// Documento del dataset.
  pub fn data_file(&self) -> PathBuf {
    self.base_dir.join("data.json")
  }

  /// Copias locales de los vídeos, descargadas fuera de banda.
  pub fn videos_dir(&self) -> PathBuf {
    self.base_dir.join("scripts").join("videos")
  }

  /// Raíz del blob store en disco usado en desarrollo.
  pub fn blob_dir(&self) -> PathBuf {
    self.data_dir.join("blobstore")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new(BASE_DIR_ENV, tmp.path().to_str().unwrap());

    let paths = ProjectPaths::new().unwrap();

    assert_eq!(paths.base_dir, tmp.path());
    assert_eq!(paths.config_file(), tmp.path().join("lienzo.toml"));
    assert_eq!(paths.data_file(), tmp.path().join("data.json"));
    assert_eq!(paths.videos_dir(), tmp.path().join("scripts/videos"));
    assert_eq!(paths.blob_dir(), tmp.path().join(".lienzo/blobstore"));
  }

  #[test]
  fn rooted_paths_do_not_touch_disk() {
    let paths = ProjectPaths::rooted("/srv/site");
    assert!(paths.videos_dir().ends_with("scripts/videos"));
    assert!(!paths.blob_dir().exists());
  }
}
