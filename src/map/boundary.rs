//! One-shot park boundary lookup against Nominatim.
//!
//! The lookup runs once at scene setup. Failure is non-fatal by contract:
//! the caller logs and continues without the overlay, and trail rendering
//! is unaffected.

use std::time::Duration;

use serde::Deserialize;

use crate::api::error::{ApiError, ApiResult};
use crate::map::layers::BoundaryLayer;
use crate::map::projection::{self, Point};

/// Nominatim search endpoint.
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Timeout for the boundary lookup.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);

/// One entry of a Nominatim search response.
#[derive(Debug, Deserialize)]
struct NominatimEntry {
    #[serde(default)]
    geojson: Option<NominatimGeojson>,
}

/// GeoJSON payload of a Nominatim entry.
#[derive(Debug, Deserialize)]
struct NominatimGeojson {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

/// Fetch the boundary polygon for a free-text query.
///
/// # Errors
/// Returns an error if the request fails or no polygon is present in the
/// response. Callers are expected to log and degrade gracefully.
pub async fn fetch_boundary(query: &str) -> ApiResult<BoundaryLayer> {
    let url = format!(
        "{NOMINATIM_URL}?q={}&format=json&polygon_geojson=1&limit=1",
        urlencoding::encode(query)
    );

    let http = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
    let response = http.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::HttpStatus(status));
    }

    let entries: Vec<NominatimEntry> = response.json().await?;
    layer_from_entries(entries)
}

/// Build the boundary layer from parsed entries.
fn layer_from_entries(entries: Vec<NominatimEntry>) -> ApiResult<BoundaryLayer> {
    let geojson = entries
        .into_iter()
        .find_map(|entry| entry.geojson)
        .ok_or_else(|| ApiError::MissingData("no boundary polygon returned".to_string()))?;

    let polygons = parse_polygons(&geojson)?;
    if polygons.is_empty() {
        return Err(ApiError::MissingData("boundary polygon is empty".to_string()));
    }
    Ok(BoundaryLayer::new(polygons))
}

/// Reproject GeoJSON polygon coordinates, accepting both `Polygon` and
/// `MultiPolygon`.
fn parse_polygons(geojson: &NominatimGeojson) -> ApiResult<Vec<Vec<Vec<Point>>>> {
    type Ring = Vec<[f64; 2]>;

    let polygons: Vec<Vec<Ring>> = match geojson.kind.as_str() {
        "MultiPolygon" => serde_json::from_value(geojson.coordinates.clone())?,
        "Polygon" => {
            let rings: Vec<Ring> = serde_json::from_value(geojson.coordinates.clone())?;
            vec![rings]
        }
        other => {
            return Err(ApiError::MissingData(format!(
                "unsupported boundary geometry: {other}"
            )));
        }
    };

    Ok(polygons
        .into_iter()
        .map(|rings| {
            rings
                .into_iter()
                .map(|ring| {
                    ring.into_iter()
                        .map(|[lon, lat]| projection::from_lon_lat(lon, lat))
                        .collect()
                })
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipolygon_parsed_and_projected() {
        let entries: Vec<NominatimEntry> = serde_json::from_str(
            r#"[{
                "geojson": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[3.4, 44.0], [3.9, 44.0], [3.9, 44.4], [3.4, 44.0]]]]
                }
            }]"#,
        )
        .unwrap();
        let layer = layer_from_entries(entries).unwrap();
        assert_eq!(layer.polygons().len(), 1);
        assert_eq!(layer.polygons()[0][0].len(), 4);
        assert!(!layer.extent().is_empty());
    }

    #[test]
    fn test_plain_polygon_wrapped() {
        let entries: Vec<NominatimEntry> = serde_json::from_str(
            r#"[{
                "geojson": {
                    "type": "Polygon",
                    "coordinates": [[[3.4, 44.0], [3.9, 44.0], [3.4, 44.4]]]
                }
            }]"#,
        )
        .unwrap();
        let layer = layer_from_entries(entries).unwrap();
        assert_eq!(layer.polygons().len(), 1);
    }

    #[test]
    fn test_missing_geojson_is_an_error() {
        let entries: Vec<NominatimEntry> = serde_json::from_str(r"[{}]").unwrap();
        assert!(matches!(
            layer_from_entries(entries),
            Err(ApiError::MissingData(_))
        ));
    }

    #[test]
    fn test_unsupported_geometry_is_an_error() {
        let entries: Vec<NominatimEntry> = serde_json::from_str(
            r#"[{ "geojson": { "type": "Point", "coordinates": [3.4, 44.0] } }]"#,
        )
        .unwrap();
        assert!(matches!(
            layer_from_entries(entries),
            Err(ApiError::MissingData(_))
        ));
    }
}
