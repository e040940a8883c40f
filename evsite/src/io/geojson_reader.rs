use evsite_core::model::EngineError;
use geo::{Geometry, GeometryCollection, Polygon};
use geojson::GeoJson;
use std::path::Path;

/// reads every polygon of a GeoJSON file. multipolygons are flattened. other geometry
/// types are ignored with a warning.
pub fn read_polygons(path: &Path, dataset: &str) -> Result<Vec<Polygon<f64>>, EngineError> {
    let collection = read_collection(path, dataset)?;
    let mut polygons = vec![];
    let mut ignored = 0;
    for geometry in collection {
        match geometry {
            Geometry::Polygon(p) => polygons.push(p),
            Geometry::MultiPolygon(mp) => polygons.extend(mp),
            _ => ignored += 1,
        }
    }
    if ignored > 0 {
        log::warn!(
            "{dataset}: ignored {ignored} non-polygonal geometries in {}",
            path.display()
        );
    }
    log::info!(
        "read {} {dataset} polygons from {}",
        polygons.len(),
        path.display()
    );
    Ok(polygons)
}

/// reads a region outline. a file with a single geometry yields that geometry, otherwise
/// the geometries are kept together as a collection.
pub fn read_boundary(path: &Path, dataset: &str) -> Result<Geometry<f64>, EngineError> {
    let mut collection = read_collection(path, dataset)?;
    if collection.0.len() == 1 {
        if let Some(geometry) = collection.0.pop() {
            return Ok(geometry);
        }
    }
    Ok(Geometry::GeometryCollection(collection))
}

fn read_collection(path: &Path, dataset: &str) -> Result<GeometryCollection<f64>, EngineError> {
    let filename = path.to_str().unwrap_or_default();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        EngineError::dataset_unavailable(dataset, format!("failed to load {filename}: {e}"))
    })?;
    let geojson = contents.parse::<GeoJson>().map_err(|e| {
        EngineError::dataset_unavailable(dataset, format!("invalid GeoJSON in {filename}: {e}"))
    })?;
    geojson::quick_collection(&geojson).map_err(|e| {
        EngineError::dataset_unavailable(
            dataset,
            format!("unsupported geometry in {filename}: {e}"),
        )
    })
}
