//! The map scene: layer lifecycle, tooltip overlay and hover hit-testing.
//!
//! The trail layer is rebuilt from scratch — old layer removed, new layer
//! added — every time the result set or the externally-owned hovered id
//! changes. The generation counter tracks those swaps so a renderer can
//! invalidate cached geometry.

use crate::api::types::Trail;
use crate::config::MapDefaults;
use crate::map::layers::{BoundaryLayer, TrailFeature, TrailLayer};
use crate::map::projection::{segment_distance_sq, Pixel, Point};
use crate::map::view::MapView;
use crate::text;

/// Pixel padding used when fitting the view to a layer.
const FIT_PADDING_PX: f64 = 50.0;

/// Zoom ceiling when fitting to the boundary polygon.
const BOUNDARY_FIT_MAX_ZOOM: f64 = 11.0;

/// Zoom ceiling when fitting to the trail set.
const TRAILS_FIT_MAX_ZOOM: f64 = 14.0;

/// Hit tolerance around a trail line, in pixels.
const HIT_TOLERANCE_PX: f64 = 6.0;

/// Tooltip pixel offset from the pointer coordinate.
const TOOLTIP_OFFSET_PX: (f64, f64) = (10.0, 0.0);

/// Floating tooltip state, shown next to the hovered trail.
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    /// Whether the tooltip is displayed.
    pub visible: bool,
    /// Anchor position in projected coordinates.
    pub position: Option<Point>,
    /// Pixel offset from the anchor.
    pub offset_px: (f64, f64),
    /// Trail name.
    pub title: String,
    /// Metric lines (difficulty, distance, elevation, duration).
    pub lines: Vec<String>,
}

impl Tooltip {
    fn hide(&mut self) {
        self.visible = false;
        self.position = None;
    }

    fn show_for(&mut self, feature: &TrailFeature, at: Point) {
        self.visible = true;
        self.position = Some(at);
        self.offset_px = TOOLTIP_OFFSET_PX;
        self.title = feature.name.clone();
        self.lines.clear();
        if let Some(difficulty) = &feature.difficulty {
            self.lines.push(difficulty.clone());
        }
        if let Some(distance) = feature.distance_m {
            self.lines.push(text::format_distance(distance));
        }
        if let Some(elevation) = feature.elevation_m {
            self.lines.push(format!("{elevation:.0}m D+"));
        }
        if let Some(duration) = feature.duration_h {
            self.lines.push(text::format_duration(duration));
        }
    }
}

/// Headless map scene: one view, two vector layers, one tooltip overlay.
#[derive(Debug)]
pub struct MapScene {
    view: MapView,
    boundary: Option<BoundaryLayer>,
    trails: Option<TrailLayer>,
    generation: u64,
    tooltip: Tooltip,
    hovered_id: Option<String>,
}

impl MapScene {
    /// Create a scene centered on the configured map defaults.
    #[must_use]
    pub fn new(defaults: &MapDefaults) -> Self {
        Self {
            view: MapView::new(defaults),
            boundary: None,
            trails: None,
            generation: 0,
            tooltip: Tooltip::default(),
            hovered_id: None,
        }
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> &MapView {
        &self.view
    }

    /// Mutable view access for zoom controls.
    pub const fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    /// Boundary layer, once loaded.
    #[must_use]
    pub const fn boundary(&self) -> Option<&BoundaryLayer> {
        self.boundary.as_ref()
    }

    /// Trail layer of the current result set.
    #[must_use]
    pub const fn trail_layer(&self) -> Option<&TrailLayer> {
        self.trails.as_ref()
    }

    /// Tooltip overlay state.
    #[must_use]
    pub const fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Generation counter, bumped on every trail-layer swap.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Currently hovered trail id, as last applied to the scene.
    #[must_use]
    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    /// Install the park boundary overlay and fit the view to it.
    ///
    /// Loaded once; the layer is immutable afterwards.
    pub fn set_boundary(&mut self, layer: BoundaryLayer) {
        let extent = layer.extent();
        self.boundary = Some(layer);
        self.view.fit(&extent, FIT_PADDING_PX, Some(BOUNDARY_FIT_MAX_ZOOM));
    }

    /// Rebuild the trail layer from the result set and hovered id.
    ///
    /// The previous layer is removed before the new one is added, so stale
    /// layers never accumulate. The view is fit to the combined extent of
    /// the new set when it is non-empty.
    pub fn set_trails(&mut self, trails: &[Trail], hovered_id: Option<&str>) {
        let layer = TrailLayer::from_trails(trails, hovered_id);

        // Remove-old/add-new, not incremental diffing.
        self.trails = None;
        self.generation += 1;

        if !layer.is_empty() {
            self.view.fit(&layer.extent(), FIT_PADDING_PX, Some(TRAILS_FIT_MAX_ZOOM));
        }
        self.trails = Some(layer);
        self.hovered_id = hovered_id.map(ToOwned::to_owned);
    }

    /// Restyle the current layer for a new hovered id without changing the
    /// result set or refitting the view.
    pub fn set_hovered(&mut self, trails: &[Trail], hovered_id: Option<&str>) {
        if self.hovered_id.as_deref() == hovered_id {
            return;
        }
        self.trails = None;
        self.generation += 1;
        self.trails = Some(TrailLayer::from_trails(trails, hovered_id));
        self.hovered_id = hovered_id.map(ToOwned::to_owned);
    }

    /// Hit-test the pointer against trail features and update the tooltip.
    ///
    /// Returns the id of the first named feature under the pointer, or
    /// `None` when the pointer is off every named feature (the tooltip is
    /// hidden in that case). The caller propagates the result to the
    /// shared hover state.
    pub fn pointer_move(&mut self, pixel: Pixel) -> Option<String> {
        let hit = self.trails.as_ref().and_then(|layer| {
            layer
                .features()
                .iter()
                .find(|feature| {
                    !feature.name.is_empty() && self.feature_hit(feature, pixel)
                })
                .cloned()
        });

        match hit {
            Some(feature) => {
                let coordinate = self.view.from_pixel(pixel);
                self.tooltip.show_for(&feature, coordinate);
                Some(feature.id)
            }
            None => {
                self.tooltip.hide();
                None
            }
        }
    }

    /// Release layers and overlay state (unmount semantics).
    pub fn reset(&mut self) {
        self.boundary = None;
        self.trails = None;
        self.generation += 1;
        self.tooltip.hide();
        self.hovered_id = None;
    }

    /// True when any segment of the feature passes within the hit
    /// tolerance of the pointer.
    fn feature_hit(&self, feature: &TrailFeature, pixel: Pixel) -> bool {
        let tolerance_sq = HIT_TOLERANCE_PX * HIT_TOLERANCE_PX;
        let points: Vec<Pixel> = feature.line.iter().map(|&p| self.view.to_pixel(p)).collect();
        if points.len() == 1 {
            return segment_distance_sq(pixel, points[0], points[0]) <= tolerance_sq;
        }
        points
            .windows(2)
            .any(|w| segment_distance_sq(pixel, w[0], w[1]) <= tolerance_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::projection::from_lon_lat;

    fn scene_with_trails(hovered: Option<&str>) -> (MapScene, Vec<Trail>) {
        let trails = vec![
            Trail::minimal("T-1", "Sentier des Menhirs", vec![[3.58, 44.11], [3.60, 44.11]]),
            Trail::minimal("T-2", "Corniche", vec![[3.58, 44.16], [3.60, 44.16]]),
            Trail::minimal("T-3", "Sans tracé", vec![]),
        ];
        let mut scene = MapScene::new(&MapDefaults::default());
        scene.set_trails(&trails, hovered);
        (scene, trails)
    }

    #[test]
    fn test_rebuild_counts_only_drawable_trails() {
        let (scene, _) = scene_with_trails(None);
        assert_eq!(scene.trail_layer().unwrap().len(), 2);
    }

    #[test]
    fn test_rebuild_bumps_generation() {
        let (mut scene, trails) = scene_with_trails(None);
        let generation = scene.generation();
        scene.set_trails(&trails, Some("T-1"));
        assert_eq!(scene.generation(), generation + 1);
        assert_eq!(scene.hovered_id(), Some("T-1"));
    }

    #[test]
    fn test_empty_results_do_not_refit_view() {
        let mut scene = MapScene::new(&MapDefaults::default());
        let center = scene.view().center();
        let zoom = scene.view().zoom();
        scene.set_trails(&[], None);
        assert_eq!(scene.view().center(), center);
        assert_eq!(scene.view().zoom(), zoom);
        assert!(scene.trail_layer().unwrap().is_empty());
    }

    #[test]
    fn test_pointer_over_trail_reports_id_and_shows_tooltip() {
        let (mut scene, _) = scene_with_trails(None);
        // Aim at the middle of T-1's segment.
        let mid = from_lon_lat(3.59, 44.11);
        let pixel = scene.view().to_pixel(mid);

        let hit = scene.pointer_move(pixel);
        assert_eq!(hit.as_deref(), Some("T-1"));
        assert!(scene.tooltip().visible);
        assert_eq!(scene.tooltip().title, "Sentier des Menhirs");
        assert_eq!(scene.tooltip().offset_px, (10.0, 0.0));
    }

    #[test]
    fn test_pointer_off_trails_hides_tooltip() {
        let (mut scene, _) = scene_with_trails(None);
        let hit = scene.pointer_move(Pixel { x: 1.0, y: 1.0 });
        assert!(hit.is_none());
        assert!(!scene.tooltip().visible);
    }

    #[test]
    fn test_unnamed_features_are_not_hoverable() {
        let trails = vec![Trail::minimal("T-9", "", vec![[3.58, 44.11], [3.60, 44.11]])];
        let mut scene = MapScene::new(&MapDefaults::default());
        scene.set_trails(&trails, None);

        let mid = from_lon_lat(3.59, 44.11);
        let pixel = scene.view().to_pixel(mid);
        assert!(scene.pointer_move(pixel).is_none());
        assert!(!scene.tooltip().visible);
    }

    #[test]
    fn test_set_hovered_restyles_without_refit() {
        let (mut scene, trails) = scene_with_trails(None);
        let center = scene.view().center();
        scene.set_hovered(&trails, Some("T-2"));
        assert_eq!(scene.view().center(), center);
        let layer = scene.trail_layer().unwrap();
        let highlighted: Vec<_> =
            layer.features().iter().filter(|f| f.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].id, "T-2");

        // Re-applying the same id is a no-op swap.
        let generation = scene.generation();
        scene.set_hovered(&trails, Some("T-2"));
        assert_eq!(scene.generation(), generation);
    }

    #[test]
    fn test_boundary_fit_is_bounded() {
        let mut scene = MapScene::new(&MapDefaults::default());
        let ring = vec![
            from_lon_lat(3.4, 44.0),
            from_lon_lat(3.9, 44.0),
            from_lon_lat(3.9, 44.4),
            from_lon_lat(3.4, 44.0),
        ];
        scene.set_boundary(BoundaryLayer::new(vec![vec![ring]]));
        assert!(scene.boundary().is_some());
        assert!(scene.view().zoom() <= 11.0);
    }

    #[test]
    fn test_reset_releases_layers() {
        let (mut scene, _) = scene_with_trails(Some("T-1"));
        scene.reset();
        assert!(scene.trail_layer().is_none());
        assert!(scene.boundary().is_none());
        assert!(scene.hovered_id().is_none());
        assert!(!scene.tooltip().visible);
    }
}
