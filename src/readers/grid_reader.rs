//! Coordinate reading for gridded NetCDF files.
//!
//! The native reader wraps libnetcdf and is only compiled with the `netcdf`
//! feature. Without it, [`default_grid_reader`] returns a reader that rejects
//! every grid file with [`ProcessingError::UnsupportedFormat`].

use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::readers::{CoordinateReader, Coordinates};

/// Grid reader used by the CLI for the current build configuration
#[cfg(feature = "netcdf")]
pub fn default_grid_reader() -> Box<dyn CoordinateReader> {
    Box::new(NetCdfReader::new())
}

#[cfg(not(feature = "netcdf"))]
pub fn default_grid_reader() -> Box<dyn CoordinateReader> {
    Box::new(UnavailableGridReader)
}

/// Stand-in used when the crate is built without NetCDF support
pub struct UnavailableGridReader;

impl CoordinateReader for UnavailableGridReader {
    fn read_coordinates(&self, path: &Path) -> Result<Coordinates> {
        Err(ProcessingError::UnsupportedFormat(format!(
            "{}: NetCDF support not compiled in (rebuild with --features netcdf)",
            path.display()
        )))
    }
}

#[cfg(feature = "netcdf")]
pub use native::NetCdfReader;

#[cfg(feature = "netcdf")]
mod native {
    use std::path::Path;
    use tracing::debug;

    use crate::error::{ProcessingError, Result};
    use crate::readers::{CoordinateReader, Coordinates};
    use crate::utils::constants::{GRID_LATITUDE_VARIABLES, GRID_LONGITUDE_VARIABLES};

    /// Reads the full latitude and longitude coordinate variables of a NetCDF file.
    ///
    /// Variables are looked up by name in order (`lat`, then `latitude`; `lon`,
    /// then `longitude`). Values equal to `_FillValue` or `missing_value` become
    /// NaN, and packed values are unpacked with `scale_factor` and `add_offset`.
    /// No data mask is applied: the extent covers the whole coordinate range.
    pub struct NetCdfReader {
        latitude_names: Vec<String>,
        longitude_names: Vec<String>,
    }

    impl NetCdfReader {
        pub fn new() -> Self {
            Self {
                latitude_names: GRID_LATITUDE_VARIABLES.iter().map(|s| s.to_string()).collect(),
                longitude_names: GRID_LONGITUDE_VARIABLES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }
        }

        fn read_variable(
            &self,
            file: &netcdf::File,
            names: &[String],
            path: &Path,
        ) -> Result<Vec<f64>> {
            let variable = names
                .iter()
                .find_map(|name| file.variable(name))
                .ok_or_else(|| {
                    ProcessingError::MissingData(format!(
                        "none of the variables {:?} found in {}",
                        names,
                        path.display()
                    ))
                })?;

            let raw: Vec<f64> = variable.get_values(..).map_err(|e| {
                ProcessingError::NetCdf(format!(
                    "Failed to read '{}' from {}: {}",
                    variable.name(),
                    path.display(),
                    e
                ))
            })?;

            Ok(decode_values(&variable, raw))
        }
    }

    /// Mask fill values and apply packing attributes
    fn decode_values(variable: &netcdf::Variable, raw: Vec<f64>) -> Vec<f64> {
        let fill_value = get_f64_attr(variable, "_FillValue");
        let missing_value = get_f64_attr(variable, "missing_value");
        let scale_factor = get_f64_attr(variable, "scale_factor").unwrap_or(1.0);
        let add_offset = get_f64_attr(variable, "add_offset").unwrap_or(0.0);

        raw.into_iter()
            .map(|value| {
                if Some(value) == fill_value || Some(value) == missing_value {
                    f64::NAN
                } else {
                    value * scale_factor + add_offset
                }
            })
            .collect()
    }

    fn get_f64_attr(variable: &netcdf::Variable, name: &str) -> Option<f64> {
        // Probing a missing attribute directly makes HDF5 print to stderr
        if !variable.attributes().any(|attr| attr.name() == name) {
            return None;
        }
        let value = variable.attribute_value(name)?.ok()?;
        f64::try_from(value).ok()
    }

    impl Default for NetCdfReader {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CoordinateReader for NetCdfReader {
        fn read_coordinates(&self, path: &Path) -> Result<Coordinates> {
            let file = netcdf::open(path).map_err(|e| {
                ProcessingError::NetCdf(format!("Failed to open {}: {}", path.display(), e))
            })?;

            let latitudes = self.read_variable(&file, &self.latitude_names, path)?;
            let longitudes = self.read_variable(&file, &self.longitude_names, path)?;

            debug!(
                path = %path.display(),
                latitudes = latitudes.len(),
                longitudes = longitudes.len(),
                "Read grid coordinates"
            );

            Ok(Coordinates::new(latitudes, longitudes))
        }
    }
}


#[cfg(all(test, feature = "netcdf"))]
mod netcdf_tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const FILL: f64 = 9.969_209_968_386_869e36;

    /// Write a file with one 1-D variable per `(name, values, fill)` entry
    fn write_grid(dir: &TempDir, variables: &[(&str, Vec<f64>, Option<f64>)]) -> PathBuf {
        let path = dir.path().join("pr_hyras_2001_2005.nc");
        let mut file = netcdf::create(&path).unwrap();

        for (name, values, fill) in variables {
            let dim = format!("{}_dim", name);
            file.add_dimension(&dim, values.len()).unwrap();
            let mut variable = file.add_variable::<f64>(name, &[dim.as_str()]).unwrap();
            if let Some(fill) = fill {
                variable.set_fill_value(*fill).unwrap();
            }
            variable.put_values(values.as_slice(), ..).unwrap();
        }

        path
    }

    #[test]
    fn test_reads_full_coordinate_arrays() {
        let dir = TempDir::new().unwrap();
        let path = write_grid(
            &dir,
            &[
                ("lat", vec![47.0, 49.5, 52.0, 55.0], None),
                ("lon", vec![5.5, 10.0, 15.0], None),
            ],
        );

        let coords = NetCdfReader::new().read_coordinates(&path).unwrap();

        assert_eq!(coords.latitudes, vec![47.0, 49.5, 52.0, 55.0]);
        assert_eq!(coords.longitudes, vec![5.5, 10.0, 15.0]);
    }

    #[test]
    fn test_falls_back_to_long_variable_names() {
        let dir = TempDir::new().unwrap();
        let path = write_grid(
            &dir,
            &[
                ("latitude", vec![47.0, 55.0], None),
                ("longitude", vec![6.0, 15.0], None),
            ],
        );

        let coords = NetCdfReader::new().read_coordinates(&path).unwrap();

        assert_eq!(coords.latitudes, vec![47.0, 55.0]);
        assert_eq!(coords.longitudes, vec![6.0, 15.0]);
    }

    #[test]
    fn test_missing_longitude_variable() {
        let dir = TempDir::new().unwrap();
        let path = write_grid(&dir, &[("lat", vec![47.0, 55.0], None)]);

        let err = NetCdfReader::new().read_coordinates(&path).unwrap_err();

        assert!(matches!(err, ProcessingError::MissingData(_)));
    }

    #[test]
    fn test_fill_values_become_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_grid(
            &dir,
            &[
                ("lat", vec![47.0, FILL, 55.0], Some(FILL)),
                ("lon", vec![6.0, 15.0], None),
            ],
        );

        let coords = NetCdfReader::new().read_coordinates(&path).unwrap();

        assert_eq!(coords.latitudes[0], 47.0);
        assert!(coords.latitudes[1].is_nan());
        assert_eq!(coords.latitudes[2], 55.0);
        assert_eq!(coords.valid_latitudes(), 2);
    }
}
