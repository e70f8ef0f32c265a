/// Input file extensions
pub const NETCDF_EXTENSION: &str = "nc";
pub const CSV_EXTENSION: &str = "csv";

/// Asset media types and titles
pub const NETCDF_MEDIA_TYPE: &str = "application/x-netcdf";
pub const CSV_MEDIA_TYPE: &str = "text/plain";
pub const NETCDF_ASSET_TITLE: &str = "NetCDF File";
pub const CSV_ASSET_TITLE: &str = "csv File";

/// Delimited text layout
pub const CSV_DELIMITER: u8 = b';';
pub const CSV_COMMENT: u8 = b'#';
pub const CSV_LATITUDE_COLUMN: &str = "lat_center";
pub const CSV_LONGITUDE_COLUMN: &str = "lon_center";

/// Grid coordinate variable names, in lookup order
pub const GRID_LATITUDE_VARIABLES: &[&str] = &["lat", "latitude"];
pub const GRID_LONGITUDE_VARIABLES: &[&str] = &["lon", "longitude"];

/// Date formats
pub const FOLDER_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
/// Hour stamps carry no minutes; parsed with "00" appended
pub const HOUR_STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Directory names
pub const DEFAULT_INPUT_DIR: &str = "appdata";
pub const METADATA_DIR: &str = "metadata";
pub const ITEMS_DIR: &str = "items";
pub const DATA_DIR: &str = "data";

/// File names
pub const RUN_CONFIG_FILE: &str = "catalog_config.yaml";
pub const COLLECTION_FILE: &str = "collection.json";
pub const COLLECTION_CONFIG_FILE: &str = "collection_config.json";
pub const ITEM_CONFIG_FILE: &str = "item_config.json";

/// Run configuration placeholders
pub const DEFAULT_TITLE: &str = "No title found";
pub const DEFAULT_DESCRIPTION: &str = "No description found";
pub const DEFAULT_ID: &str = "No id found";
pub const ENV_PREFIX: &str = "STAC";

/// STAC collection metadata
pub const STAC_VERSION: &str = "1.0.0";
pub const COLLECTION_LICENSE: &str = "CC-BY-4.0";
pub const COLLECTION_KEYWORDS: &[&str] = &["NetCDF", "Climate", "Precipitation", "Extreme events"];
pub const PROVIDER_NAME: &str = "Deutscher Wetterdienst (DWD)";
pub const PROVIDER_ROLES: &[&str] = &["producer", "licensor"];
pub const PROVIDER_URL: &str = "https://www.dwd.de/";

/// Collection config values
pub const ITEM_FOLDER_LEVEL: &str = "YYYY";
pub const THUMBNAIL_REGEX: &str = "^thumbnail";
pub const OVERVIEW_REGEX: &str = "^overview";
