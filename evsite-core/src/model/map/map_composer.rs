use super::{demand_context, html_template, MapLayer, RenderableDocument};
use crate::model::{engine::OptimizationResult, EngineError};
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::json;

/// assembles the rendered map for an optimization result.
pub struct MapComposer<'a> {
    title: String,
    boundary: Option<&'a geo::Geometry<f64>>,
}

impl<'a> MapComposer<'a> {
    pub fn new(title: &str, boundary: Option<&'a geo::Geometry<f64>>) -> MapComposer<'a> {
        MapComposer {
            title: title.to_string(),
            boundary,
        }
    }

    /// renders the result as a standalone HTML page with layers in [`MapLayer`] order:
    /// the bounding box outline, demand heat context, the optional region boundary,
    /// existing stations and finally the selected sites, so new sites draw on top.
    ///
    /// an empty selection with no existing stations still renders a valid map of the
    /// bounding box. rendering is deterministic.
    pub fn render(&self, result: &OptimizationResult) -> Result<RenderableDocument, EngineError> {
        let features = self.features(result);
        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };
        let data = serde_json::to_string(&collection)
            .map_err(|e| EngineError::Render(format!("failure serializing map layers: {e}")))?;
        let legend = serde_json::to_string(&self.legend(result))
            .map_err(|e| EngineError::Render(format!("failure serializing map legend: {e}")))?;
        let (title, legend, data) = (
            escape_html(&self.title),
            escape_script(&legend),
            escape_script(&data),
        );
        let html = html_template::fill(&[
            (html_template::TITLE_SLOT, title.as_str()),
            (html_template::LEGEND_SLOT, legend.as_str()),
            (html_template::DATA_SLOT, data.as_str()),
        ]);

        Ok(RenderableDocument {
            html,
            features: collection,
            existing_markers: result.existing.len(),
            new_site_markers: result.selection.len(),
        })
    }

    fn features(&self, result: &OptimizationResult) -> Vec<Feature> {
        let mut features = vec![];

        let mut bbox_props = JsonObject::new();
        bbox_props.insert(String::from("resolution"), json![result.resolution]);
        features.push(feature(
            geojson::Value::from(&result.bbox.to_polygon()),
            MapLayer::BoundingBox,
            bbox_props,
        ));

        for block in demand_context::aggregate(&result.demand) {
            let mut props = JsonObject::new();
            props.insert(String::from("weight"), json![block.weight]);
            features.push(feature(
                geojson::Value::from(&geo::Point::new(block.lon, block.lat)),
                MapLayer::Demand,
                props,
            ));
        }

        if let Some(boundary) = self.boundary {
            features.push(feature(
                geojson::Value::from(boundary),
                MapLayer::Boundary,
                JsonObject::new(),
            ));
        }

        for station in result.existing.iter() {
            let mut props = JsonObject::new();
            props.insert(String::from("id"), json![station.id]);
            props.insert(String::from("capacity"), json![station.capacity]);
            features.push(feature(
                geojson::Value::from(&geo::Point::new(station.lon, station.lat)),
                MapLayer::Existing,
                props,
            ));
        }

        for site in result.selection.iter() {
            let point = site.candidate.point;
            let mut props = JsonObject::new();
            props.insert(String::from("rank"), json![site.rank]);
            props.insert(String::from("row"), json![point.row_index]);
            props.insert(String::from("col"), json![point.col_index]);
            props.insert(
                String::from("demand_weight"),
                json![site.candidate.demand_weight],
            );
            props.insert(String::from("marginal_demand"), json![site.marginal_demand]);
            features.push(feature(
                geojson::Value::from(&point.to_point()),
                MapLayer::Selected,
                props,
            ));
        }
        features
    }

    fn legend(&self, result: &OptimizationResult) -> String {
        format!(
            "<b>{}</b><br/>\
             <i style=\"background:#d6604d\"></i>Suggested new stations ({})<br/>\
             <i style=\"background:#1b7837\"></i>Existing stations ({})<br/>\
             <i style=\"background:#ff8c00\"></i>Demand<br/>\
             <i style=\"border:2px dashed #555555\"></i>Optimization area",
            escape_html(&self.title),
            result.selection.len(),
            result.existing.len()
        )
    }
}

fn feature(geometry: geojson::Value, layer: MapLayer, mut properties: JsonObject) -> Feature {
    properties.insert(String::from(MapLayer::PROPERTY), json![layer.as_str()]);
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// JSON embedded in a script element must not close the element early
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        demand::DemandSample,
        grid::GridPoint,
        infrastructure::{Candidate, ExistingStation},
        placement::{SelectedSite, Selection},
        BoundingBox,
    };

    fn result(n_existing: usize, n_selected: usize) -> OptimizationResult {
        let bbox = BoundingBox::new(8.0, 13.5, 76.0, 80.5).unwrap();
        let existing = (0..n_existing)
            .map(|i| ExistingStation::new(&format!("e{i}"), 9.0 + i as f64 * 0.1, 77.0, None))
            .collect();
        let sites = (0..n_selected)
            .map(|i| SelectedSite {
                rank: i,
                candidate: Candidate::eligible(
                    GridPoint::new(10.0 + i as f64 * 0.2, 78.0, i, 0),
                    1.0,
                    None,
                ),
                marginal_demand: 2.0,
            })
            .collect();
        let demand = vec![DemandSample {
            point: GridPoint::new(10.0, 78.0, 0, 0),
            weight: 0.5,
        }];
        OptimizationResult {
            selection: Selection { sites },
            existing,
            bbox,
            resolution: 10,
            demand,
        }
    }

    #[test]
    fn test_layer_counts() {
        let doc = MapComposer::new("test", None).render(&result(3, 2)).unwrap();
        assert_eq!(doc.existing_markers, 3);
        assert_eq!(doc.new_site_markers, 2);
        assert_eq!(doc.layer_count(MapLayer::Existing), 3);
        assert_eq!(doc.layer_count(MapLayer::Selected), 2);
        assert_eq!(doc.layer_count(MapLayer::BoundingBox), 1);
        assert_eq!(doc.layer_count(MapLayer::Demand), 1);
        assert_eq!(doc.layer_count(MapLayer::Boundary), 0);
    }

    #[test]
    fn test_existing_drawn_before_selected() {
        let doc = MapComposer::new("test", None).render(&result(2, 2)).unwrap();
        let layers = doc
            .features
            .features
            .iter()
            .filter_map(|f| f.property(MapLayer::PROPERTY).and_then(|v| v.as_str()))
            .collect::<Vec<_>>();
        let last_existing = layers.iter().rposition(|l| *l == "existing").unwrap();
        let first_selected = layers.iter().position(|l| *l == "selected").unwrap();
        assert!(last_existing < first_selected);
        assert_eq!(layers[0], "bbox");
    }

    #[test]
    fn test_empty_result_renders_bbox() {
        let mut empty = result(0, 0);
        empty.demand = vec![];
        let doc = MapComposer::new("empty", None).render(&empty).unwrap();
        assert_eq!(doc.features.features.len(), 1);
        assert!(doc.html.starts_with("<!DOCTYPE html>"));
        assert!(doc.html.contains("\"bbox\""));
        assert!(!doc.html.contains("{{data}}"));
    }

    #[test]
    fn test_boundary_overlay() {
        let boundary = geo::Geometry::Point(geo::Point::new(78.0, 10.0));
        let doc = MapComposer::new("b", Some(&boundary))
            .render(&result(0, 0))
            .unwrap();
        assert_eq!(doc.layer_count(MapLayer::Boundary), 1);
    }

    #[test]
    fn test_deterministic() {
        let composer = MapComposer::new("det", None);
        let a = composer.render(&result(4, 3)).unwrap();
        let b = composer.render(&result(4, 3)).unwrap();
        assert_eq!(a.html, b.html);
    }

    #[test]
    fn test_slot_text_in_data_is_not_expanded() {
        let mut r = result(1, 0);
        r.existing[0].id = String::from("{{legend}}");
        let doc = MapComposer::new("{{data}}", None).render(&r).unwrap();
        assert!(doc.html.contains("<title>{{data}}</title>"));
        assert!(doc.html.contains("\"id\":\"{{legend}}\""));
    }

    #[test]
    fn test_page_template_complete() {
        let doc = MapComposer::new("page", None).render(&result(1, 1)).unwrap();
        assert!(doc.html.contains("var evsiteStyles = {"));
        assert!(doc.html.contains("selected: { radius: 9, color: \"#b2182b\""));
        assert!(doc.html.contains("evsiteLegend.addTo(evsiteMap);"));
        assert!(doc.html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_station_id_is_not_markup() {
        let mut r = result(1, 0);
        r.existing[0].id = String::from("<img src=x onerror=alert(1)>");
        let doc = MapComposer::new("ids", None).render(&r).unwrap();
        // the id only appears inside the embedded layer data
        let lines = doc
            .html
            .lines()
            .filter(|l| l.contains("<img"))
            .collect::<Vec<_>>();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("var evsiteData = "));
        assert!(doc.html.contains("popup.textContent = \"Existing Station \" + p.id;"));
        assert!(!doc.html.contains("bindPopup(\"Existing Station \""));
    }

    #[test]
    fn test_title_escaped() {
        let doc = MapComposer::new("<script>", None).render(&result(0, 0)).unwrap();
        assert!(doc.html.contains("&lt;script&gt;"));
        assert!(!doc.html.contains("<title><script>"));
    }
}
