use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::{BoundingBox, Link, SourceFile, TimeRange};
use crate::utils::constants::STAC_VERSION;

/// A source file after it has been placed in the data tree
#[derive(Debug, Clone)]
pub struct ItemRecord {
    pub source: SourceFile,
    pub item_dir: PathBuf,
    pub asset_path: PathBuf,
    pub bbox: BoundingBox,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Geometry {
    pub fn from_bbox(bbox: &BoundingBox) -> Self {
        Self {
            kind: "Polygon".to_string(),
            coordinates: vec![bbox.to_polygon_ring()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProperties {
    /// Always null; items carry a start/end range instead
    pub datetime: Option<DateTime<Utc>>,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub title: String,
    pub roles: Vec<String>,
}

/// STAC Item document for one relocated file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StacItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub stac_version: String,
    pub stac_extensions: Vec<String>,
    pub id: String,
    pub geometry: Geometry,
    pub bbox: BoundingBox,
    pub properties: ItemProperties,
    pub links: Vec<Link>,
    pub assets: BTreeMap<String, Asset>,
}

impl StacItem {
    pub fn from_record(record: &ItemRecord) -> Result<Self> {
        let format = record.source.format();
        let mut assets = BTreeMap::new();
        assets.insert(
            "data".to_string(),
            Asset {
                href: record.asset_path.to_string_lossy().into_owned(),
                media_type: format.media_type().to_string(),
                title: format.asset_title().to_string(),
                roles: vec!["data".to_string()],
            },
        );

        Ok(Self {
            kind: "Feature".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: record.source.stem()?.to_string(),
            geometry: Geometry::from_bbox(&record.bbox),
            bbox: record.bbox,
            properties: ItemProperties {
                datetime: None,
                start_datetime: record.time_range.start(),
                end_datetime: record.time_range.end(),
            },
            links: Vec::new(),
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::Path;

    #[test]
    fn test_item_from_record() {
        let source = SourceFile::from_path(Path::new("appdata/stations_2020010100-2020123123.csv"))
            .unwrap();
        let record = ItemRecord {
            source,
            item_dir: PathBuf::from("data/2020/x"),
            asset_path: PathBuf::from("data/2020/x/stations_2020010100-2020123123.csv"),
            bbox: BoundingBox::new(6.0, 47.5, 14.9, 54.9).unwrap(),
            time_range: TimeRange::new(
                Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2020, 12, 31, 23, 0, 0).unwrap(),
            )
            .unwrap(),
        };

        let item = StacItem::from_record(&record).unwrap();
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], "stations_2020010100-2020123123");
        assert_eq!(value["type"], "Feature");
        assert!(value["properties"]["datetime"].is_null());
        assert_eq!(value["properties"]["start_datetime"], "2020-01-01T00:00:00Z");
        assert_eq!(value["assets"]["data"]["type"], "text/plain");
        assert_eq!(value["geometry"]["type"], "Polygon");
        assert_eq!(value["geometry"]["coordinates"][0][0][0], 14.9);
    }
}
