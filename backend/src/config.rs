use lienzo_config::{ConfigError, PATHS, ProjectPaths, SiteConfig, StorageConfig};
use serde::Serialize;

/// Effective settings for one process: file config plus CLI overrides.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeSettings {
  pub site: SiteConfig,
  pub storage: StorageConfig,
  #[serde(skip)]
  pub paths: ProjectPaths,
}

impl RuntimeSettings {
  pub fn load(debug_override: bool) -> Result<Self, ConfigError> {
    let mut site = SiteConfig::load()?;
    let storage = StorageConfig::load()?;

    // The flag can only switch debug on; it never forces production.
    site.debug |= debug_override;

    Ok(Self { site, storage, paths: PATHS.clone() })
  }

  pub fn debug(&self) -> bool {
    self.site.debug
  }
}
