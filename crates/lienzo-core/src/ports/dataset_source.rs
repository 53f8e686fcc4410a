use crate::errors::DataLoadError;

/// Port que abstrae de dónde sale el documento del dataset.
///
/// El núcleo no gestiona su ciclo de vida: solo lo lee.
pub trait DatasetSource: Send + Sync {
  fn read(&self) -> Result<Vec<u8>, DataLoadError>;

  /// Descripción legible para logs (p. ej. la ruta del archivo).
  fn describe(&self) -> String;
}

/// Fuente en memoria, útil para tests y para datasets embebidos.
#[derive(Debug, Clone)]
pub struct MemorySource {
  bytes: Vec<u8>,
}

impl MemorySource {
  pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
    Self { bytes: bytes.into() }
  }
}

impl DatasetSource for MemorySource {
  fn read(&self) -> Result<Vec<u8>, DataLoadError> {
    Ok(self.bytes.clone())
  }

  fn describe(&self) -> String {
    format!("<memory: {} bytes>", self.bytes.len())
  }
}
