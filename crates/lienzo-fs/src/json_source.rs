use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lienzo_core::DataLoadError;
use lienzo_core::ports::DatasetSource;

/// Dataset leído de un archivo JSON en una ruta fija.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
  path: PathBuf,
}

impl JsonFileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl DatasetSource for JsonFileSource {
  fn read(&self) -> Result<Vec<u8>, DataLoadError> {
    std::fs::read(&self.path).map_err(|e| match e.kind() {
      ErrorKind::NotFound => DataLoadError::Missing(self.describe()),
      _ => DataLoadError::Io { location: self.describe(), source: e },
    })
  }

  fn describe(&self) -> String {
    self.path.display().to_string()
  }
}
