pub mod asset_resolver;
pub mod content_repository;
pub mod dataset_loader;
pub mod session_page;

pub use asset_resolver::{AssetResolver, SeedReport};
pub use content_repository::ContentRepository;
pub use dataset_loader::{DatasetLoader, LoadMode};
pub use session_page::{PageMeta, SessionPage, SessionRoute, session_path};
