pub mod artist;
pub mod asset;
pub mod catalog;
pub mod dataset;
pub mod navigation;
pub mod session;
pub mod slug;

pub use artist::Artist;
pub use asset::{Asset, AssetPath, BlobKey, InvalidAssetPath};
pub use catalog::{Catalog, SessionLookup};
pub use dataset::Dataset;
pub use navigation::Direction;
pub use session::Session;
pub use slug::Slug;
