use super::MapLayer;
use geojson::FeatureCollection;

/// a self-contained map page plus the layer data embedded in it.
#[derive(Clone, Debug)]
pub struct RenderableDocument {
    pub html: String,
    pub features: FeatureCollection,
    pub existing_markers: usize,
    pub new_site_markers: usize,
}

impl RenderableDocument {
    /// number of features tagged with the given layer
    pub fn layer_count(&self, layer: MapLayer) -> usize {
        self.features
            .features
            .iter()
            .filter(|f| {
                f.property(MapLayer::PROPERTY)
                    .and_then(|v| v.as_str())
                    .is_some_and(|s| s == layer.as_str())
            })
            .count()
    }
}
