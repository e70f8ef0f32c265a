pub mod coordinates;
pub mod delimited_reader;
pub mod grid_reader;

pub use coordinates::{CoordinateReader, Coordinates};
pub use delimited_reader::DelimitedTextReader;
pub use grid_reader::{default_grid_reader, UnavailableGridReader};

#[cfg(feature = "netcdf")]
pub use grid_reader::NetCdfReader;
