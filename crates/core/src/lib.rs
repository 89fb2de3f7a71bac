pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::{MediaItem, MediaSource};
