//! page template for rendered maps. the page loads Leaflet and OpenStreetMap tiles and
//! draws the embedded GeoJSON layers in array order.

pub const TITLE_SLOT: &str = "{{title}}";
pub const DATA_SLOT: &str = "{{data}}";
pub const LEGEND_SLOT: &str = "{{legend}}";

pub const PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>{{title}}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
html, body, #evsite-map { height: 100%; width: 100%; margin: 0; padding: 0; }
.evsite-legend { background: white; padding: 6px 10px; font: 13px sans-serif; line-height: 20px; }
.evsite-legend i { display: inline-block; width: 12px; height: 12px; margin-right: 6px; border-radius: 6px; }
</style>
</head>
<body>
<div id="evsite-map"></div>
<script>
var evsiteData = {{data}};
var evsiteStyles = {
  bbox: { color: "#555555", weight: 2, dashArray: "6 4", fill: false },
  boundary: { color: "blue", weight: 2, fillColor: "transparent" },
  demand: { radius: 6, stroke: false, fillColor: "#ff8c00" },
  existing: { radius: 5, color: "#1b7837", weight: 1, fillColor: "#1b7837", fillOpacity: 0.9 },
  selected: { radius: 9, color: "#b2182b", weight: 2, fillColor: "#d6604d", fillOpacity: 0.95 }
};
var evsiteMap = L.map("evsite-map");
L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 18,
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(evsiteMap);
var evsiteBounds = null;
L.geoJSON(evsiteData, {
  style: function (f) { return evsiteStyles[f.properties.layer] || {}; },
  pointToLayer: function (f, latlng) {
    var p = f.properties;
    var style = Object.assign({}, evsiteStyles[p.layer] || {});
    if (p.layer === "demand") { style.fillOpacity = 0.1 + 0.6 * p.weight; }
    return L.circleMarker(latlng, style);
  },
  onEachFeature: function (f, layer) {
    var p = f.properties;
    if (p.layer === "bbox") { evsiteBounds = layer.getBounds(); }
    if (p.layer === "selected") {
      layer.bindPopup("Suggested New Station #" + (p.rank + 1) +
        "<br/>demand " + p.demand_weight.toFixed(3) +
        "<br/>marginal demand " + p.marginal_demand.toFixed(3));
    } else if (p.layer === "existing") {
      var popup = document.createElement("span");
      popup.textContent = "Existing Station " + p.id;
      layer.bindPopup(popup);
    }
  }
}).addTo(evsiteMap);
if (evsiteBounds) { evsiteMap.fitBounds(evsiteBounds); } else { evsiteMap.setView([0, 0], 2); }
var evsiteLegend = L.control({ position: "bottomright" });
evsiteLegend.onAdd = function () {
  var div = L.DomUtil.create("div", "evsite-legend");
  div.innerHTML = {{legend}};
  return div;
};
evsiteLegend.addTo(evsiteMap);
</script>
</body>
</html>
"##;

/// fills every slot in [`PAGE`] in a single pass, so slot names appearing inside the
/// inserted values are left untouched.
pub fn fill(values: &[(&str, &str)]) -> String {
    let capacity = PAGE.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = PAGE;
    loop {
        let next = values
            .iter()
            .filter_map(|(slot, value)| rest.find(slot).map(|pos| (pos, *slot, *value)))
            .min_by_key(|(pos, _, _)| *pos);
        match next {
            None => {
                out.push_str(rest);
                return out;
            }
            Some((pos, slot, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + slot.len()..];
            }
        }
    }
}
