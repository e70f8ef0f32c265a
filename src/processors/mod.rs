pub mod aggregator;
pub mod extent;
pub mod organizer;
pub mod pipeline;

pub use aggregator::{aggregate, ExtentAccumulator};
pub use extent::extract_extent;
pub use organizer::DirectoryOrganizer;
pub use pipeline::{discover_sources, BuildSummary, CatalogBuilder, InspectedFile};
