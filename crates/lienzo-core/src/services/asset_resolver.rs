use tracing::{debug, info, warn};

use crate::domain::{Asset, AssetPath, BlobKey};
use crate::errors::ResolutionError;
use crate::ports::{BlobError, BlobStore, LocalCache};

/// Resultado de sembrar el blob store con toda la caché local.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
  pub seeded: usize,
  pub skipped: usize,
}

/// Resuelve assets desde el blob store primario.
///
/// En modo desarrollo, un "no encontrado" en el blob store se intenta cubrir
/// copiando el archivo de la caché local al blob store (write-through) y
/// volviendo a leerlo. En producción nunca se toca la caché local.
pub struct AssetResolver<B: BlobStore, L: LocalCache> {
  store: B,
  local: L,
  bucket: String,
}

impl<B: BlobStore, L: LocalCache> AssetResolver<B, L> {
  pub fn new(store: B, local: L, bucket: impl Into<String>) -> Self {
    Self { store, local, bucket: bucket.into() }
  }

  pub fn store(&self) -> &B {
    &self.store
  }

  pub fn bucket(&self) -> &str {
    &self.bucket
  }

  pub fn key_for(&self, path: AssetPath) -> BlobKey {
    BlobKey::new(self.bucket.clone(), path)
  }

  pub async fn resolve(&self, asset_path: &str, dev_mode: bool) -> Result<Asset, ResolutionError> {
    let path = AssetPath::parse(asset_path)?;
    let key = self.key_for(path);

    match self.fetch(&key).await {
      Err(ResolutionError::NotFound(_)) if dev_mode => {}
      other => return other,
    }

    // Solo desarrollo: sembrar el blob store desde la caché local.
    let Some(bytes) = self.local.read(&key.path).await? else {
      warn!(%key, "asset missing from blob store and local cache");
      return Err(ResolutionError::NotFound(key.to_string()));
    };

    info!(%key, bytes = bytes.len(), "creating a blob store copy from the local cache");
    self.store.put(&key, &bytes, key.path.content_type()).await?;

    self.fetch(&key).await
  }

  /// Copia al blob store todos los assets locales que aún no estén en él.
  pub async fn seed_all(&self) -> Result<SeedReport, ResolutionError> {
    let mut report = SeedReport::default();

    for path in self.local.list().await? {
      let key = self.key_for(path);

      if self.store.exists(&key).await? {
        report.skipped += 1;
        continue;
      }

      let Some(bytes) = self.local.read(&key.path).await? else {
        // Borrado entre el listado y la lectura.
        continue;
      };
      self.store.put(&key, &bytes, key.path.content_type()).await?;
      debug!(%key, "seeded");
      report.seeded += 1;
    }

    info!(seeded = report.seeded, skipped = report.skipped, "local cache seeding finished");
    Ok(report)
  }

  async fn fetch(&self, key: &BlobKey) -> Result<Asset, ResolutionError> {
    match self.store.get(key).await {
      Ok(bytes) => {
        Ok(Asset { key: key.clone(), content_type: key.path.content_type(), bytes })
      }
      Err(BlobError::NotFound(_)) => Err(ResolutionError::NotFound(key.to_string())),
      Err(e) => Err(ResolutionError::Store(e)),
    }
  }
}
