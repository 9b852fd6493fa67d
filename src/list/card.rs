//! Hike card view-model.
//!
//! One card per trail, the visual counterpart of one map line. The card
//! never owns the hover state: `highlighted` is computed by the list from
//! the shared hovered id.

use crate::api::types::Trail;
use crate::text;

/// Placeholder shown for metrics the backend did not provide.
const MISSING_METRIC: &str = "–";

/// View-model of one result card.
#[derive(Clone, Debug)]
pub struct HikeCard {
    /// Trail id, matching the map feature id.
    pub id: String,
    /// Cleaned display title.
    pub title: String,
    /// Difficulty label, empty when unknown.
    pub difficulty: String,
    /// Badge color classes for the difficulty.
    pub difficulty_classes: &'static str,
    /// Practice label, empty when unknown.
    pub practice: String,
    /// Practice pictogram.
    pub practice_icon: &'static str,
    /// Formatted duration, or a dash.
    pub duration_label: String,
    /// Formatted distance, or a dash.
    pub distance_label: String,
    /// Formatted elevation gain, or a dash.
    pub elevation_label: String,
    /// Cleaned short description.
    pub summary: String,
    /// True exactly when the shared hovered id equals this card's id.
    pub highlighted: bool,
    /// Local expand/collapse of the description text.
    pub expanded: bool,
}

impl HikeCard {
    /// Build a card from a trail.
    #[must_use]
    pub fn from_trail(trail: &Trail) -> Self {
        Self {
            id: trail.id.clone(),
            title: text::clean_text(&trail.name),
            difficulty: trail.difficulty.clone(),
            difficulty_classes: text::difficulty_color(&trail.difficulty),
            practice: trail.practice.clone(),
            practice_icon: text::practice_icon(&trail.practice),
            duration_label: if trail.duration_h > 0.0 {
                text::format_duration(trail.duration_h)
            } else {
                MISSING_METRIC.to_string()
            },
            distance_label: if trail.distance_m > 0.0 {
                text::format_distance(trail.distance_m)
            } else {
                MISSING_METRIC.to_string()
            },
            elevation_label: if trail.elevation_gain_m > 0.0 {
                format!("{:.0}m", trail.elevation_gain_m)
            } else {
                MISSING_METRIC.to_string()
            },
            summary: text::clean_text(&trail.short_description),
            highlighted: false,
            expanded: false,
        }
    }

    /// Toggle the local description expansion.
    pub const fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}
