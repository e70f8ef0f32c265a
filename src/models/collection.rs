use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BoundingBox, TimeRange};
use crate::utils::constants::{
    COLLECTION_LICENSE, COLLECTION_KEYWORDS, ITEM_CONFIG_FILE, ITEM_FOLDER_LEVEL, OVERVIEW_REGEX,
    PROVIDER_NAME, PROVIDER_ROLES, PROVIDER_URL, STAC_VERSION, THUMBNAIL_REGEX,
};

/// Aggregated spatial and temporal envelope of every processed file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionExtent {
    pub spatial: BoundingBox,
    pub temporal: TimeRange,
}

impl CollectionExtent {
    pub fn summary(&self) -> String {
        format!(
            "Spatial extent: {}\nTemporal extent: {}",
            self.spatial, self.temporal
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub roles: Vec<String>,
    pub url: String,
}

impl Default for Provider {
    fn default() -> Self {
        Self {
            name: PROVIDER_NAME.to_string(),
            roles: PROVIDER_ROLES.iter().map(|r| r.to_string()).collect(),
            url: PROVIDER_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialExtent {
    pub bbox: Vec<BoundingBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalExtent {
    pub interval: Vec<[DateTime<Utc>; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

/// STAC Collection document written to `metadata/collection.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub stac_version: String,
    pub stac_extensions: Vec<String>,
    pub description: String,
    pub links: Vec<Link>,
    pub title: String,
    pub extent: Extent,
    pub license: String,
    pub keywords: Vec<String>,
    pub providers: Vec<Provider>,
}

impl CollectionRecord {
    pub fn new(id: &str, title: &str, description: &str, extent: &CollectionExtent) -> Self {
        Self {
            kind: "Collection".to_string(),
            id: id.to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            description: description.to_string(),
            links: Vec::new(),
            title: title.to_string(),
            extent: Extent {
                spatial: SpatialExtent {
                    bbox: vec![extent.spatial],
                },
                temporal: TemporalExtent {
                    interval: vec![[extent.temporal.start(), extent.temporal.end()]],
                },
            },
            license: COLLECTION_LICENSE.to_string(),
            keywords: COLLECTION_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            providers: vec![Provider::default()],
        }
    }

    pub fn with_self_link(mut self, href: &str) -> Self {
        self.links.retain(|link| link.rel != "self");
        self.links.push(Link {
            rel: "self".to_string(),
            href: href.to_string(),
            media_type: "application/json".to_string(),
        });
        self
    }
}

/// Fixed-shape descriptor written to `metadata/collection_config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub id: String,
    pub item_asset_ignore_list: Vec<String>,
    pub item_folder_level: String,
    pub thumbnail_regex: String,
    pub overview_regex: String,
}

impl CollectionConfig {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            item_asset_ignore_list: vec![ITEM_CONFIG_FILE.to_string()],
            item_folder_level: ITEM_FOLDER_LEVEL.to_string(),
            thumbnail_regex: THUMBNAIL_REGEX.to_string(),
            overview_regex: OVERVIEW_REGEX.to_string(),
        }
    }
}

/// Per-item sidecar written next to each relocated file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub bbox: BoundingBox,
}
