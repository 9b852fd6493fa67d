//! Bounding extents in projected coordinates.

use crate::map::projection::Point;

/// An axis-aligned bounding box in Mercator meters.
///
/// A fresh extent is empty; including points grows it. Fitting the view to
/// an empty extent is a no-op by contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Minimum easting.
    pub min_x: f64,
    /// Minimum northing.
    pub min_y: f64,
    /// Maximum easting.
    pub max_x: f64,
    /// Maximum northing.
    pub max_y: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

impl Extent {
    /// The empty extent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// True when no point was ever included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow to include a point.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// Grow to include another extent.
    pub fn include_extent(&mut self, other: &Self) {
        if !other.is_empty() {
            self.include(Point { x: other.min_x, y: other.min_y });
            self.include(Point { x: other.max_x, y: other.max_y });
        }
    }

    /// Extent of a polyline; empty for an empty line.
    #[must_use]
    pub fn of_line(line: &[Point]) -> Self {
        let mut extent = Self::empty();
        for point in line {
            extent.include(*point);
        }
        extent
    }

    /// Width in meters; zero when empty.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_x - self.min_x }
    }

    /// Height in meters; zero when empty.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_y - self.min_y }
    }

    /// Center point; origin when empty.
    #[must_use]
    pub fn center(&self) -> Point {
        if self.is_empty() {
            Point::default()
        } else {
            Point {
                x: f64::midpoint(self.min_x, self.max_x),
                y: f64::midpoint(self.min_y, self.max_y),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_extent() {
        let extent = Extent::empty();
        assert!(extent.is_empty());
        assert_eq!(extent.width(), 0.0);
        assert_eq!(extent.center(), Point::default());
    }

    #[test]
    fn test_include_grows_extent() {
        let mut extent = Extent::empty();
        extent.include(Point { x: 1.0, y: 2.0 });
        extent.include(Point { x: -3.0, y: 5.0 });
        assert!(!extent.is_empty());
        assert_eq!(extent.width(), 4.0);
        assert_eq!(extent.height(), 3.0);
        assert_eq!(extent.center(), Point { x: -1.0, y: 3.5 });
    }

    #[test]
    fn test_of_line() {
        let line = [
            Point { x: 0.0, y: 0.0 },
            Point { x: 10.0, y: -2.0 },
            Point { x: 4.0, y: 7.0 },
        ];
        let extent = Extent::of_line(&line);
        assert_eq!(extent.min_y, -2.0);
        assert_eq!(extent.max_x, 10.0);
        assert!(Extent::of_line(&[]).is_empty());
    }

    #[test]
    fn test_include_extent_ignores_empty() {
        let mut extent = Extent::empty();
        extent.include_extent(&Extent::empty());
        assert!(extent.is_empty());

        let mut other = Extent::empty();
        other.include(Point { x: 1.0, y: 1.0 });
        extent.include_extent(&other);
        assert_eq!(extent.center(), Point { x: 1.0, y: 1.0 });
    }
}
