//! Hike detail view-model (the modal panel).
//!
//! Purely presentational: everything is derived from one selected trail.
//! Media URLs are repaired for the park's Geotrek host and filtered
//! against the configured host allow-list.

use crate::api::types::{Trail, TrailMedia};
use crate::text;

/// Geotrek host whose media URLs miss the `/media/` path segment.
const GEOTREK_HOST: &str = "https://geotrek-admin.cevennes-parcnational.net/";

/// An image ready for display in the detail panel.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailImage {
    /// Image title, falling back to the trail name upstream.
    pub title: Option<String>,
    /// Repaired URL.
    pub url: String,
}

/// View-model of the detail panel for one selected trail.
#[derive(Clone, Debug)]
pub struct HikeDetail {
    /// Trail id.
    pub id: String,
    /// Cleaned title.
    pub title: String,
    /// Cover photo URL, when present and allowed.
    pub cover_photo: Option<String>,
    /// Difficulty label.
    pub difficulty: String,
    /// Practice label with pictogram.
    pub practice: String,
    /// Itinerary type (boucle, aller-retour, ...).
    pub route_kind: Option<String>,
    /// Formatted duration.
    pub duration_label: String,
    /// Formatted distance.
    pub distance_label: String,
    /// Formatted elevation gain.
    pub elevation_label: String,
    /// Cleaned long description.
    pub description: String,
    /// Points of interest.
    pub points_of_interest: Vec<String>,
    /// Start point name.
    pub start: Option<String>,
    /// End point name.
    pub end: Option<String>,
    /// Parking information.
    pub parking: Option<String>,
    /// Road access description.
    pub road_access: Option<String>,
    /// Public transport information.
    pub public_transport: Option<String>,
    /// Recommended season.
    pub recommended_season: Option<String>,
    /// Recommended equipment.
    pub recommended_equipment: Vec<String>,
    /// Displayable images.
    pub images: Vec<DetailImage>,
}

impl HikeDetail {
    /// Build the detail view-model for a trail.
    #[must_use]
    pub fn from_trail(trail: &Trail, allowed_hosts: &[String]) -> Self {
        Self {
            id: trail.id.clone(),
            title: text::clean_text(&trail.name),
            cover_photo: trail
                .cover_photo
                .as_deref()
                .filter(|url| host_allowed(url, allowed_hosts))
                .map(repair_media_url),
            difficulty: trail.difficulty.clone(),
            practice: format!("{} {}", text::practice_icon(&trail.practice), trail.practice)
                .trim()
                .to_string(),
            route_kind: trail.route_kind.clone(),
            duration_label: text::format_duration(trail.duration_h),
            distance_label: text::format_distance(trail.distance_m),
            elevation_label: format!("{:.0}m D+", trail.elevation_gain_m),
            description: text::clean_text(&trail.description),
            points_of_interest: trail.points_of_interest.clone(),
            start: trail.start.clone(),
            end: trail.end.clone(),
            parking: trail.parking.clone(),
            road_access: trail.road_access.clone(),
            public_transport: trail.public_transport.clone(),
            recommended_season: trail.recommended_season.clone(),
            recommended_equipment: trail.recommended_equipment.clone(),
            images: images_for(trail, allowed_hosts),
        }
    }
}

/// Select displayable images: declared images, or anything whose URL looks
/// like one, served from an allowed host.
fn images_for(trail: &Trail, allowed_hosts: &[String]) -> Vec<DetailImage> {
    trail
        .media
        .iter()
        .filter(|media| is_image(media))
        .filter(|media| host_allowed(&media.url, allowed_hosts))
        .map(|media| DetailImage {
            title: media.title.clone(),
            url: repair_media_url(&media.url),
        })
        .collect()
}

fn is_image(media: &TrailMedia) -> bool {
    media.kind == "image"
        || [".jpg", ".jpeg", ".png", ".webp"]
            .iter()
            .any(|ext| media.url.ends_with(ext))
}

fn host_allowed(url: &str, allowed_hosts: &[String]) -> bool {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToOwned::to_owned))
        .is_some_and(|host| allowed_hosts.iter().any(|allowed| *allowed == host))
}

/// Geotrek serves media under `/media/`, but trail payloads reference the
/// bare host. Insert the missing segment.
#[must_use]
pub fn repair_media_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix(GEOTREK_HOST) {
        if rest.starts_with("media/") {
            url.to_string()
        } else {
            format!("{GEOTREK_HOST}media/{rest}")
        }
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn hosts() -> Vec<String> {
        AppConfig::default().image_hosts
    }

    #[test]
    fn test_repair_media_url() {
        assert_eq!(
            repair_media_url("https://geotrek-admin.cevennes-parcnational.net/photo.jpg"),
            "https://geotrek-admin.cevennes-parcnational.net/media/photo.jpg"
        );
        // Already repaired URLs are untouched.
        assert_eq!(
            repair_media_url("https://geotrek-admin.cevennes-parcnational.net/media/photo.jpg"),
            "https://geotrek-admin.cevennes-parcnational.net/media/photo.jpg"
        );
        // Other hosts are untouched.
        assert_eq!(
            repair_media_url("https://image.jimcdn.com/photo.jpg"),
            "https://image.jimcdn.com/photo.jpg"
        );
    }

    #[test]
    fn test_detail_filters_media_by_host_and_kind() {
        let mut trail = Trail::minimal("T-1", "Corniche", vec![[3.5, 44.1]]);
        trail.media = vec![
            TrailMedia {
                kind: "image".to_string(),
                url: "https://image.jimcdn.com/a.jpg".to_string(),
                ..TrailMedia::default()
            },
            TrailMedia {
                kind: "video".to_string(),
                url: "https://image.jimcdn.com/clip.mp4".to_string(),
                ..TrailMedia::default()
            },
            TrailMedia {
                kind: "image".to_string(),
                url: "https://autre-hote.example/b.jpg".to_string(),
                ..TrailMedia::default()
            },
        ];

        let detail = HikeDetail::from_trail(&trail, &hosts());
        assert_eq!(detail.images.len(), 1);
        assert_eq!(detail.images[0].url, "https://image.jimcdn.com/a.jpg");
    }

    #[test]
    fn test_detail_with_minimal_trail_does_not_panic() {
        let trail = Trail::minimal("T-2", "Nu", vec![[3.5, 44.1]]);
        let detail = HikeDetail::from_trail(&trail, &hosts());
        assert_eq!(detail.duration_label, "0min");
        assert_eq!(detail.distance_label, "0.0 km");
        assert!(detail.images.is_empty());
        assert!(detail.cover_photo.is_none());
    }

    #[test]
    fn test_extension_detected_as_image() {
        let mut trail = Trail::minimal("T-3", "Photo", vec![[3.5, 44.1]]);
        trail.media = vec![TrailMedia {
            kind: String::new(),
            url: "https://image.jimcdn.com/vue.webp".to_string(),
            ..TrailMedia::default()
        }];
        let detail = HikeDetail::from_trail(&trail, &hosts());
        assert_eq!(detail.images.len(), 1);
    }
}
