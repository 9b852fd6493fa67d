//! Scroll-into-view with manual-scroll suppression.
//!
//! Hovering a map feature centers the matching card in the results panel,
//! unless the visitor scrolled the panel themselves within the last
//! second. The guard is an explicit timestamp comparison, not a timer.

use std::time::{Duration, Instant};

/// Cooldown after the last manual scroll during which programmatic
/// scrolling is suppressed.
pub const USER_SCROLL_COOLDOWN: Duration = Duration::from_secs(1);

/// Timestamp-based guard blocking programmatic scrolls right after a
/// manual one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollGuard {
    last_user_scroll: Option<Instant>,
}

impl ScrollGuard {
    /// Create an inactive guard.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_user_scroll: None }
    }

    /// Record a manual scroll/wheel/touch event.
    pub const fn note_user_scroll(&mut self, now: Instant) {
        self.last_user_scroll = Some(now);
    }

    /// True while programmatic scrolling must stay suppressed.
    #[must_use]
    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.last_user_scroll
            .is_some_and(|last| now.duration_since(last) < USER_SCROLL_COOLDOWN)
    }
}

/// Vertical offset centering an element inside a scrollable container,
/// clamped to the scrollable range.
#[must_use]
pub fn center_scroll_offset(
    element_top: f64,
    element_height: f64,
    container_height: f64,
    content_height: f64,
) -> f64 {
    let target = element_top - container_height / 2.0 + element_height / 2.0;
    let max_scroll = (content_height - container_height).max(0.0);
    target.clamp(0.0, max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_inactive_by_default() {
        let guard = ScrollGuard::new();
        assert!(!guard.is_suppressed(Instant::now()));
    }

    #[test]
    fn test_guard_suppresses_within_cooldown() {
        let mut guard = ScrollGuard::new();
        let start = Instant::now();
        guard.note_user_scroll(start);
        assert!(guard.is_suppressed(start + Duration::from_millis(300)));
        assert!(!guard.is_suppressed(start + Duration::from_millis(1100)));
    }

    #[test]
    fn test_center_scroll_offset_centers_element() {
        // Element at 500px, 100px tall, 400px viewport, 2000px content.
        let offset = center_scroll_offset(500.0, 100.0, 400.0, 2000.0);
        assert!((offset - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center_scroll_offset_clamps_to_range() {
        // Near the top: cannot scroll above zero.
        assert_eq!(center_scroll_offset(10.0, 100.0, 400.0, 2000.0), 0.0);
        // Near the bottom: cannot scroll past the content end.
        assert_eq!(center_scroll_offset(1950.0, 100.0, 400.0, 2000.0), 1600.0);
        // Content shorter than the viewport: pinned at zero.
        assert_eq!(center_scroll_offset(50.0, 100.0, 400.0, 300.0), 0.0);
    }
}
