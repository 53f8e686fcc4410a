use anyhow::Context;
use lienzo_core::services::{AssetResolver, ContentRepository, DatasetLoader, LoadMode};
use lienzo_fs::{DirLocalCache, JsonFileSource};
use lienzo_storage::ConfiguredBlobStore;
use tracing::info;

use crate::config::RuntimeSettings;

pub type SiteRepository = ContentRepository<JsonFileSource>;
pub type SiteResolver = AssetResolver<ConfiguredBlobStore, DirLocalCache>;

/// Everything a command needs, built once per process.
pub struct AppState {
  pub settings: RuntimeSettings,
  pub repository: SiteRepository,
  pub resolver: SiteResolver,
}

impl AppState {
  pub fn build(settings: RuntimeSettings) -> anyhow::Result<Self> {
    let paths = &settings.paths;

    // 1. Dataset source + loader (live reload in debug)
    let source = JsonFileSource::new(paths.data_file());
    let loader = DatasetLoader::new(source, LoadMode::from_debug(settings.debug()));
    let repository = ContentRepository::new(loader);

    // 2. Blob store chosen by `[storage].backend`
    let store =
      ConfiguredBlobStore::from_config(&settings.storage, paths).context("failed to open blob store")?;

    // 3. Local video cache (only consulted in debug)
    let local = DirLocalCache::new(paths.videos_dir());
    let resolver = AssetResolver::new(store, local, settings.storage.bucket.clone());

    info!(
      base = %paths.base_dir.display(),
      debug = settings.debug(),
      bucket = %settings.storage.bucket,
      "services wired"
    );
    Ok(Self { settings, repository, resolver })
  }
}
