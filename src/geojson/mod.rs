use crate::location::Coordinate;
use crate::selector::{NearestLocations, Record};
use geo_types::Point;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::to_value;

pub const LOCATIONS_LAYER: &str = "Locations of filming";
pub const DISTANCE_LAYER: &str = "Distance from you";
pub const ANTIPODES_LAYER: &str = "Opposite points for fun";

/// A named overlay, its markers get `color` unless it is `None`.
pub struct Layer {
    pub name: &'static str,
    pub color: Option<&'static str>,
    pub features: FeatureCollection,
}

fn point_feature(coordinate: Coordinate, popup: String) -> Feature {
    let mut properties = JsonObject::new();
    if let Ok(value) = to_value(popup) {
        properties.insert("popup".to_string(), value);
    }

    let point: Point<f64> = coordinate.into();
    let geometry = Geometry::new(Value::from(&point));

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn collection<F>(nearest: &NearestLocations, to_feature: F) -> FeatureCollection
where
    F: Fn(&Record) -> Feature,
{
    FeatureCollection {
        bbox: None,
        features: nearest.iter().map(to_feature).collect(),
        foreign_members: None,
    }
}

/// The three overlays of the map, in drawing order.
pub fn layers(nearest: &NearestLocations) -> Vec<Layer> {
    vec![
        Layer {
            name: LOCATIONS_LAYER,
            color: None,
            features: collection(nearest, |record| {
                point_feature(record.coordinate, record.film.clone())
            }),
        },
        Layer {
            name: DISTANCE_LAYER,
            color: None,
            features: collection(nearest, |record| {
                let popup = format!("Distance from you - {:.2} km", record.distance);
                point_feature(record.coordinate, popup)
            }),
        },
        Layer {
            name: ANTIPODES_LAYER,
            color: Some("red"),
            features: collection(nearest, |record| {
                point_feature(record.coordinate.antipode(), record.film.clone())
            }),
        },
    ]
}
