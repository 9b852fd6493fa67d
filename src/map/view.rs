//! Map view state: center, zoom and viewport math.

use crate::config::MapDefaults;
use crate::map::extent::Extent;
use crate::map::projection::{self, Pixel, Point};

/// Resolution in meters per pixel at zoom 0 for 256-pixel tiles.
const BASE_RESOLUTION: f64 = 2.0 * projection::HALF_WORLD_M / 256.0;

/// The view onto the map: projected center, zoom bounds and viewport size.
#[derive(Clone, Copy, Debug)]
pub struct MapView {
    center: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    viewport_width_px: f64,
    viewport_height_px: f64,
}

impl MapView {
    /// Create a view from the configured defaults.
    #[must_use]
    pub fn new(defaults: &MapDefaults) -> Self {
        Self {
            center: projection::from_lon_lat(defaults.center_lon, defaults.center_lat),
            zoom: defaults.zoom.clamp(defaults.min_zoom, defaults.max_zoom),
            min_zoom: defaults.min_zoom,
            max_zoom: defaults.max_zoom,
            viewport_width_px: defaults.viewport_width_px,
            viewport_height_px: defaults.viewport_height_px,
        }
    }

    /// Projected center of the view.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Current zoom level.
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Meters per pixel at the current zoom.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        BASE_RESOLUTION / self.zoom.exp2()
    }

    /// Increase zoom by one step, clamped.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + 1.0);
    }

    /// Decrease zoom by one step, clamped.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - 1.0);
    }

    /// Set the zoom level, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Fit the view to an extent with pixel padding and an optional zoom
    /// ceiling. Fitting an empty extent is a no-op.
    pub fn fit(&mut self, extent: &Extent, padding_px: f64, max_zoom: Option<f64>) {
        if extent.is_empty() {
            return;
        }

        let usable_w = (self.viewport_width_px - 2.0 * padding_px).max(1.0);
        let usable_h = (self.viewport_height_px - 2.0 * padding_px).max(1.0);

        // Resolution needed so the extent fits both axes.
        let needed = (extent.width() / usable_w)
            .max(extent.height() / usable_h)
            .max(f64::MIN_POSITIVE);

        let mut zoom = (BASE_RESOLUTION / needed).log2();
        if let Some(ceiling) = max_zoom {
            zoom = zoom.min(ceiling);
        }

        self.center = extent.center();
        self.set_zoom(zoom);
    }

    /// Convert a projected point to viewport pixels.
    #[must_use]
    pub fn to_pixel(&self, point: Point) -> Pixel {
        let res = self.resolution();
        Pixel {
            x: (point.x - self.center.x) / res + self.viewport_width_px / 2.0,
            y: self.viewport_height_px / 2.0 - (point.y - self.center.y) / res,
        }
    }

    /// Convert viewport pixels back to a projected point.
    #[must_use]
    pub fn from_pixel(&self, pixel: Pixel) -> Point {
        let res = self.resolution();
        Point {
            x: (pixel.x - self.viewport_width_px / 2.0).mul_add(res, self.center.x),
            y: (self.viewport_height_px / 2.0 - pixel.y).mul_add(res, self.center.y),
        }
    }
}
