mod backend;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::{BlobBackendKind, SiteConfig, StorageConfig};
pub use paths::{BASE_DIR_ENV, ConfigError, ProjectPaths};

use once_cell::sync::Lazy;

// Singleton de rutas del proyecto
pub static PATHS: Lazy<ProjectPaths> =
  Lazy::new(|| ProjectPaths::new().unwrap_or_else(|_| ProjectPaths::rooted(".")));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(&PATHS));
