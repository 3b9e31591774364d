//! Loads campus path geometry from stored GeoJSON.

use geojson::{GeoJson, Value};
use tracing::debug;

use crate::types::{PathFeature, Point};

/// Parses a GeoJSON FeatureCollection into path features.
///
/// Only LineString geometries contribute, matching how campus paths are
/// stored; other geometry types and features without geometry are skipped.
/// Positions are GeoJSON order, `[lng, lat]`.
pub fn path_features_from_geojson(raw: &str) -> Result<Vec<PathFeature>, geojson::Error> {
    let parsed = raw.parse::<GeoJson>()?;
    let GeoJson::FeatureCollection(collection) = parsed else {
        return Ok(Vec::new());
    };

    let mut features = Vec::new();
    for feature in collection.features {
        let Some(geometry) = feature.geometry else {
            continue;
        };
        let Value::LineString(positions) = geometry.value else {
            continue;
        };
        let points: Vec<Point> = positions
            .iter()
            .filter(|pos| pos.len() >= 2)
            .map(|pos| Point::new(pos[1], pos[0]))
            .collect();
        features.push(PathFeature::new(points));
    }

    debug!(count = features.len(), "loaded path features from geojson");
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPUS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "main walk" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[121.0583, 13.7565], [121.0590, 13.7570]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Point",
                    "coordinates": [121.0583, 13.7565]
                }
            }
        ]
    }"#;

    #[test]
    fn keeps_linestrings_only() {
        let features = path_features_from_geojson(CAMPUS).unwrap();
        assert_eq!(features.len(), 1);
        let points = features[0].points();
        assert_eq!(points.len(), 2);
        // Positions are [lng, lat].
        assert_eq!(points[0], Point::new(13.7565, 121.0583));
    }

    #[test]
    fn non_collection_input_yields_nothing() {
        let features = path_features_from_geojson(
            r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#,
        )
        .unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(path_features_from_geojson("{ not geojson").is_err());
    }
}
