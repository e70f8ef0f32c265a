pub mod catalog;
pub mod item_config;
pub mod json;
pub mod stac;

pub use catalog::CatalogEmitter;
pub use item_config::{ItemConfigWriter, OverwritePolicy, WriteOutcome};
pub use json::write_json;
pub use stac::write_item;
