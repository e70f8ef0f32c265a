pub mod constants;
pub mod filename;
pub mod layout;
pub mod progress;

pub use constants::*;
pub use filename::parse_time_range;
pub use layout::CatalogLayout;
pub use progress::ProgressReporter;
