pub mod catalog;
pub mod scale;
pub mod types;
pub mod viewport;

pub use catalog::{Catalog, CatalogBuild, SkippedFile, SourceError, TimestampSource};
pub use scale::LinearScale;
pub use types::{Geometry, TimelineEntry, Timestamp};
pub use viewport::Viewport;
