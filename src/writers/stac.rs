use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::models::StacItem;
use crate::writers::json::{write_json, STAC_INDENT};

/// Save a STAC item as `<items_dir>/<item-id>.json`
pub fn write_item(items_dir: &Path, item: &StacItem) -> Result<PathBuf> {
    let path = items_dir.join(format!("{}.json", item.id));
    write_json(&path, item, STAC_INDENT)?;
    debug!(path = %path.display(), "STAC item saved");

    Ok(path)
}
