mod demand_reader;
mod file_dataset_loader;
mod geojson_reader;
mod station_reader;

pub use demand_reader::read_observations;
pub use file_dataset_loader::FileDatasetLoader;
pub use geojson_reader::{read_boundary, read_polygons};
pub use station_reader::read_stations;
