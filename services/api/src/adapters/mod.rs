pub mod catalog;
pub mod media;

pub use catalog::JsonCatalogStore;
pub use media::FsMediaStore;
