pub mod blob_store;
pub mod dataset_source;
pub mod local_cache;

pub use blob_store::{BlobError, BlobStore};
pub use dataset_source::{DatasetSource, MemorySource};
pub use local_cache::LocalCache;
