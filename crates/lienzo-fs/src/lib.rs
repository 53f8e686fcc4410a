pub mod io;
pub mod json_source;
pub mod local_cache;
pub mod walker;

pub use io::{atomic_write, atomic_write_async, atomic_write_str};
pub use json_source::JsonFileSource;
pub use local_cache::DirLocalCache;
