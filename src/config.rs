//! Application configuration.
//!
//! Endpoint selection, network timeouts and map defaults for the Cévennes
//! trail client. The backend base URL can be overridden through the
//! `CEVENNES_API_URL` environment variable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the backend base URL.
pub const API_URL_ENV: &str = "CEVENNES_API_URL";

/// Default backend base URL when no environment override is set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Nominatim query used to load the park boundary polygon.
pub const DEFAULT_BOUNDARY_QUERY: &str = "Parc National des Cévennes";

/// Configuration for the trail client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the conversational search backend.
    pub api_base_url: String,
    /// Request timeout.
    #[serde(with = "duration_serde")]
    pub request_timeout: Duration,
    /// Connection timeout.
    #[serde(with = "duration_serde")]
    pub connect_timeout: Duration,
    /// Free-text query for the one-shot boundary polygon lookup.
    pub boundary_query: String,
    /// Map view defaults.
    pub map: MapDefaults,
    /// External hosts allowed to serve trail media.
    pub image_hosts: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            boundary_query: DEFAULT_BOUNDARY_QUERY.to_string(),
            map: MapDefaults::default(),
            image_hosts: default_image_hosts(),
        }
    }
}

impl AppConfig {
    /// Create a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }
        config
    }

    /// Set the backend base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the boundary lookup query.
    #[must_use]
    pub fn with_boundary_query(mut self, query: impl Into<String>) -> Self {
        self.boundary_query = query.into();
        self
    }

    /// Set the map defaults.
    #[must_use]
    pub const fn with_map(mut self, map: MapDefaults) -> Self {
        self.map = map;
        self
    }
}

/// Initial view parameters for the map scene.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MapDefaults {
    /// Initial center longitude (degrees).
    pub center_lon: f64,
    /// Initial center latitude (degrees).
    pub center_lat: f64,
    /// Initial zoom level.
    pub zoom: f64,
    /// Minimum zoom level.
    pub min_zoom: f64,
    /// Maximum zoom level.
    pub max_zoom: f64,
    /// Viewport width in pixels.
    pub viewport_width_px: f64,
    /// Viewport height in pixels.
    pub viewport_height_px: f64,
}

impl Default for MapDefaults {
    fn default() -> Self {
        // Centré sur le Parc National des Cévennes.
        Self {
            center_lon: 3.5833,
            center_lat: 44.1167,
            zoom: 11.0,
            min_zoom: 8.0,
            max_zoom: 18.0,
            viewport_width_px: 1024.0,
            viewport_height_px: 768.0,
        }
    }
}

/// Hosts known to serve hike media for the park.
fn default_image_hosts() -> Vec<String> {
    vec![
        "image.jimcdn.com".to_string(),
        "geotrek-admin.cevennes-parcnational.net".to_string(),
    ]
}

/// Serde module for Duration serialization.
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.boundary_query, DEFAULT_BOUNDARY_QUERY);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.image_hosts.len(), 2);
    }

    #[test]
    fn test_config_builder() {
        let config = AppConfig::new()
            .with_api_base_url("http://backend:9000")
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.api_base_url, "http://backend:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_map_defaults_cover_the_park() {
        let map = MapDefaults::default();
        assert!((map.center_lon - 3.5833).abs() < 1e-9);
        assert!((map.center_lat - 44.1167).abs() < 1e-9);
        assert!(map.min_zoom < map.zoom && map.zoom < map.max_zoom);
    }
}
