pub mod bbox;
pub mod collection;
pub mod item;
pub mod source;
pub mod time_range;

pub use bbox::BoundingBox;
pub use collection::{
    CollectionConfig, CollectionExtent, CollectionRecord, ItemConfig, Link, Provider,
};
pub use item::{ItemRecord, StacItem};
pub use source::{SourceFile, SourceFormat};
pub use time_range::TimeRange;
