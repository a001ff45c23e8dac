use crate::error::Error;
use crate::geojson::layers;
use crate::location::Coordinate;
use crate::selector::NearestLocations;
use serde_json::json;
use std::fs::write;
use std::path::Path;
use tracing::info;

pub const DEFAULT_MAP_PATH: &str = "map.html";
const ZOOM_START: u8 = 10;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Film locations</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const config = __CONFIG__;
const map = L.map("map").setView(config.center, config.zoom);
L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(map);
const overlays = {};
for (const layer of config.layers) {
  const group = L.geoJSON(layer.features, {
    pointToLayer: (feature, latlng) => layer.color
      ? L.circleMarker(latlng, { color: layer.color, radius: 8 })
      : L.marker(latlng),
    onEachFeature: (feature, marker) => marker.bindPopup(feature.properties.popup)
  });
  group.addTo(map);
  overlays[layer.name] = group;
}
L.control.layers(null, overlays).addTo(map);
</script>
</body>
</html>
"#;

/// A standalone leaflet page centred on the user with one overlay per layer.
pub fn render(user: Coordinate, nearest: &NearestLocations) -> String {
    let layers: Vec<_> = layers(nearest)
        .into_iter()
        .map(|layer| {
            json!({
                "name": layer.name,
                "color": layer.color,
                "features": layer.features,
            })
        })
        .collect();
    let config = json!({
        "center": [user.lat, user.lon],
        "zoom": ZOOM_START,
        "layers": layers,
    });
    // keep "</script>" in film titles from closing the script element
    let config = config.to_string().replace("</", "<\\/");
    TEMPLATE.replace("__CONFIG__", &config)
}

pub fn write_map(path: &Path, user: Coordinate, nearest: &NearestLocations) -> Result<(), Error> {
    write(path, render(user, nearest)).map_err(|source| Error::Render {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), markers = nearest.len(), "map written");
    Ok(())
}
