//! Vector layers: park boundary and trail tracks.

use crate::api::types::Trail;
use crate::map::extent::Extent;
use crate::map::projection::{self, Point};

/// Stroke style of a line or outline.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// CSS color.
    pub color: String,
    /// Line width in pixels.
    pub width: f64,
    /// Dash pattern, if any.
    pub line_dash: Option<Vec<f64>>,
}

/// Fill style of a polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    /// CSS color.
    pub color: String,
}

/// Default stroke for a trail track.
#[must_use]
pub fn trail_stroke() -> StrokeStyle {
    StrokeStyle {
        color: "#ff8c00".to_string(),
        width: 2.0,
        line_dash: None,
    }
}

/// Emphasized stroke for the hovered trail track.
#[must_use]
pub fn trail_stroke_highlighted() -> StrokeStyle {
    StrokeStyle {
        color: "#a52a2a".to_string(),
        width: 4.0,
        line_dash: None,
    }
}

/// Dashed stroke of the park boundary.
#[must_use]
pub fn boundary_stroke() -> StrokeStyle {
    StrokeStyle {
        color: "rgba(74, 222, 128, 0.8)".to_string(),
        width: 2.0,
        line_dash: Some(vec![5.0, 5.0]),
    }
}

/// Low-opacity fill of the park boundary.
#[must_use]
pub fn boundary_fill() -> FillStyle {
    FillStyle {
        color: "rgba(74, 222, 128, 0.05)".to_string(),
    }
}

/// One trail as a line feature, tagged with its display metrics for the
/// tooltip.
#[derive(Clone, Debug)]
pub struct TrailFeature {
    /// Trail identifier, linking the feature to its result card.
    pub id: String,
    /// Display name; features without a name are not hoverable.
    pub name: String,
    /// Difficulty label.
    pub difficulty: Option<String>,
    /// Duration in hours.
    pub duration_h: Option<f64>,
    /// Length in meters.
    pub distance_m: Option<f64>,
    /// Positive elevation gain in meters.
    pub elevation_m: Option<f64>,
    /// Projected line geometry.
    pub line: Vec<Point>,
    /// True for the (at most one) hovered feature.
    pub highlighted: bool,
}

impl TrailFeature {
    /// Stroke style, depending on the hover state.
    #[must_use]
    pub fn stroke(&self) -> StrokeStyle {
        if self.highlighted {
            trail_stroke_highlighted()
        } else {
            trail_stroke()
        }
    }

    /// Bounding extent of the feature.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::of_line(&self.line)
    }
}

/// The trail vector layer, rebuilt from scratch on every change.
#[derive(Clone, Debug, Default)]
pub struct TrailLayer {
    features: Vec<TrailFeature>,
}

impl TrailLayer {
    /// Build the layer from a result set and the externally-owned hovered
    /// id. Trails with empty geometry are skipped, never fatal.
    #[must_use]
    pub fn from_trails(trails: &[Trail], hovered_id: Option<&str>) -> Self {
        let mut features = Vec::with_capacity(trails.len());
        for trail in trails {
            if trail.geometry.is_empty() {
                tracing::warn!(id = %trail.id, "skipping trail with empty geometry");
                continue;
            }
            let line = trail
                .geometry
                .coordinates
                .iter()
                .map(|&[lon, lat]| projection::from_lon_lat(lon, lat))
                .collect();
            features.push(TrailFeature {
                id: trail.id.clone(),
                name: trail.name.clone(),
                difficulty: (!trail.difficulty.is_empty()).then(|| trail.difficulty.clone()),
                duration_h: (trail.duration_h > 0.0).then_some(trail.duration_h),
                distance_m: (trail.distance_m > 0.0).then_some(trail.distance_m),
                elevation_m: (trail.elevation_gain_m > 0.0).then_some(trail.elevation_gain_m),
                line,
                highlighted: hovered_id.is_some_and(|id| id == trail.id),
            });
        }
        Self { features }
    }

    /// Features in draw order.
    #[must_use]
    pub fn features(&self) -> &[TrailFeature] {
        &self.features
    }

    /// Number of drawable features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when no feature is drawable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Combined extent of all features.
    #[must_use]
    pub fn extent(&self) -> Extent {
        let mut extent = Extent::empty();
        for feature in &self.features {
            extent.include_extent(&feature.extent());
        }
        extent
    }
}

/// The static park boundary layer, loaded once and immutable afterwards.
#[derive(Clone, Debug)]
pub struct BoundaryLayer {
    /// Projected polygons: polygon → rings → points.
    polygons: Vec<Vec<Vec<Point>>>,
}

impl BoundaryLayer {
    /// Build the layer from projected polygons.
    #[must_use]
    pub const fn new(polygons: Vec<Vec<Vec<Point>>>) -> Self {
        Self { polygons }
    }

    /// Projected polygons.
    #[must_use]
    pub fn polygons(&self) -> &[Vec<Vec<Point>>] {
        &self.polygons
    }

    /// Combined extent of all rings.
    #[must_use]
    pub fn extent(&self) -> Extent {
        let mut extent = Extent::empty();
        for polygon in &self.polygons {
            for ring in polygon {
                for point in ring {
                    extent.include(*point);
                }
            }
        }
        extent
    }
}
