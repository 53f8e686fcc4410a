use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::debug;

use crate::domain::catalog::Catalog;
use crate::domain::dataset::Dataset;
use crate::errors::DataLoadError;
use crate::ports::DatasetSource;

/// Política de carga del dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
  /// Se carga una vez y se reutiliza durante toda la vida del proceso.
  Cached,
  /// Se vuelve a leer en cada llamada (edición en vivo en modo debug).
  Live,
}

impl LoadMode {
  pub fn from_debug(debug: bool) -> Self {
    if debug { LoadMode::Live } else { LoadMode::Cached }
  }
}

/// Cargador del dataset con ciclo de vida explícito.
///
/// - `initialize` publica el primer snapshot (si no lo hay ya).
/// - `reload` relee la fuente y reemplaza el snapshot completo.
/// - `current` devuelve el snapshot vigente según el `LoadMode`.
///
/// El snapshot se publica con un swap atómico y sin lock: dos primeras
/// cargas concurrentes pueden publicar ambas, con contenido equivalente.
pub struct DatasetLoader<S: DatasetSource> {
  source: S,
  mode: LoadMode,
  snapshot: ArcSwapOption<Catalog>,
}

impl<S: DatasetSource> DatasetLoader<S> {
  pub fn new(source: S, mode: LoadMode) -> Self {
    Self { source, mode, snapshot: ArcSwapOption::empty() }
  }

  pub fn mode(&self) -> LoadMode {
    self.mode
  }

  pub fn source(&self) -> &S {
    &self.source
  }

  /// Lee y parsea la fuente sin publicar nada.
  pub fn load(&self) -> Result<Catalog, DataLoadError> {
    let bytes = self.source.read()?;
    let dataset = Dataset::from_slice(&bytes)?;
    let catalog = Catalog::build(dataset)?;

    debug!(
      source = %self.source.describe(),
      artists = catalog.artists().len(),
      "dataset loaded"
    );
    Ok(catalog)
  }

  /// Carga y publica el snapshot si todavía no existe.
  pub fn initialize(&self) -> Result<Arc<Catalog>, DataLoadError> {
    match self.snapshot.load_full() {
      Some(catalog) => Ok(catalog),
      None => self.reload(),
    }
  }

  /// Relee la fuente y reemplaza el snapshot. Si falla, el anterior sigue
  /// publicado.
  pub fn reload(&self) -> Result<Arc<Catalog>, DataLoadError> {
    let catalog = Arc::new(self.load()?);
    self.snapshot.store(Some(Arc::clone(&catalog)));
    Ok(catalog)
  }

  pub fn current(&self) -> Result<Arc<Catalog>, DataLoadError> {
    match self.mode {
      LoadMode::Live => self.reload(),
      LoadMode::Cached => self.initialize(),
    }
  }
}
