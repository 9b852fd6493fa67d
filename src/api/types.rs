//! Wire types for the search backend.
//!
//! Field names on the wire are the backend's French names (Geotrek heritage);
//! they are mapped to English identifiers with `serde(rename)`. Optional
//! fields default instead of failing deserialization: across backend
//! iterations several fields have changed type (string vs list), so the
//! lenient shapes here are deliberate.

use serde::{Deserialize, Deserializer, Serialize};

use crate::chat::message::{Message, SummaryContent};

/// Line geometry of a trail, as ordered `[lon, lat]` pairs (EPSG:4326).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailGeometry {
    /// GeoJSON geometry type (`LineString` in practice).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Ordered longitude/latitude pairs.
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

impl TrailGeometry {
    /// True when the geometry carries no coordinates and cannot be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// A geographic point with named axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// A media item attached to a trail.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrailMedia {
    /// Media title.
    #[serde(rename = "titre", default)]
    pub title: Option<String>,
    /// Caption.
    #[serde(rename = "legende", default)]
    pub caption: Option<String>,
    /// Media kind (`image`, `video`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Media URL.
    #[serde(default)]
    pub url: String,
    /// Author credit.
    #[serde(rename = "auteur", default)]
    pub author: Option<String>,
    /// License.
    #[serde(rename = "licence", default)]
    pub license: Option<String>,
}

/// Accessibility flags for a trail.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccessibilityFlags {
    /// Wheelchair accessible.
    #[serde(default)]
    pub pmr: bool,
    /// Stroller accessible.
    #[serde(rename = "poussette", default)]
    pub stroller: bool,
    /// Free-text access difficulty.
    #[serde(rename = "niveau_difficulte_acces", default)]
    pub access_difficulty: Option<String>,
}

/// Accessibility information; the backend has served both a flag object and
/// a plain list of tags for this field.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accessibility {
    /// Structured flags.
    Flags(AccessibilityFlags),
    /// Free-form tags.
    Tags(Vec<String>),
}

/// A hiking trail with its geometry and descriptive metadata.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trail {
    /// Stable identifier.
    #[serde(rename = "id_local", default)]
    pub id: String,
    /// Display name.
    #[serde(rename = "nom_itineraire", default)]
    pub name: String,
    /// Long free-text presentation (may contain HTML entities).
    #[serde(rename = "presentation", default)]
    pub description: String,
    /// Short presentation.
    #[serde(rename = "presentation_courte", default)]
    pub short_description: String,
    /// Length in meters.
    #[serde(rename = "longueur", default)]
    pub distance_m: f64,
    /// Difficulty label (Facile, Moyen, ...).
    #[serde(rename = "difficulte", default)]
    pub difficulty: String,
    /// Practice type (pédestre, VTT, ...).
    #[serde(rename = "pratique", default)]
    pub practice: String,
    /// Duration in hours.
    #[serde(rename = "duree", default)]
    pub duration_h: f64,
    /// Positive elevation gain in meters.
    #[serde(rename = "denivele_positif", default)]
    pub elevation_gain_m: f64,
    /// Negative elevation gain in meters.
    #[serde(rename = "denivele_negatif", default)]
    pub elevation_loss_m: f64,
    /// Minimum altitude in meters.
    #[serde(rename = "altitude_min", default)]
    pub altitude_min_m: Option<f64>,
    /// Maximum altitude in meters.
    #[serde(rename = "altitude_max", default)]
    pub altitude_max_m: Option<f64>,
    /// Itinerary type (boucle, aller-retour, ...).
    #[serde(rename = "type_itineraire", default)]
    pub route_kind: Option<String>,
    /// Start point name.
    #[serde(rename = "depart", default)]
    pub start: Option<String>,
    /// End point name.
    #[serde(rename = "arrivee", default)]
    pub end: Option<String>,
    /// Start coordinates.
    #[serde(rename = "coordonnees_depart", default)]
    pub start_point: Option<GeoPoint>,
    /// End coordinates.
    #[serde(rename = "coordonnees_arrivee", default)]
    pub end_point: Option<GeoPoint>,
    /// Municipalities crossed (string or list on the wire).
    #[serde(rename = "communes_nom", default, deserialize_with = "string_or_seq")]
    pub municipalities: Vec<String>,
    /// Waymarking description.
    #[serde(rename = "balisage", default)]
    pub waymarking: Option<String>,
    /// Ground surface type.
    #[serde(rename = "type_sol", default)]
    pub surface: Option<String>,
    /// Points of interest (string or list on the wire).
    #[serde(rename = "points_interet", default, deserialize_with = "string_or_seq")]
    pub points_of_interest: Vec<String>,
    /// Accessibility information.
    #[serde(rename = "accessibilite", default)]
    pub accessibility: Option<Accessibility>,
    /// Average visitor rating.
    #[serde(rename = "note_moyenne", default)]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(rename = "nombre_avis", default)]
    pub review_count: Option<u32>,
    /// Parking information.
    #[serde(rename = "parking_info", default)]
    pub parking: Option<String>,
    /// Road access description.
    #[serde(rename = "acces_routier", default)]
    pub road_access: Option<String>,
    /// Public transport description.
    #[serde(rename = "transports_commun", default)]
    pub public_transport: Option<String>,
    /// Recommended season.
    #[serde(rename = "saison_recommandee", default)]
    pub recommended_season: Option<String>,
    /// Recommended equipment.
    #[serde(rename = "equipements_recommandes", default)]
    pub recommended_equipment: Vec<String>,
    /// Themes (string or list on the wire).
    #[serde(rename = "themes", default, deserialize_with = "string_or_seq")]
    pub themes: Vec<String>,
    /// Highlights of the route.
    #[serde(rename = "points_forts", default)]
    pub strong_points: Vec<String>,
    /// Free-text recommendations.
    #[serde(rename = "recommandations", default)]
    pub advice: Option<String>,
    /// Attached media.
    #[serde(rename = "medias", default)]
    pub media: Vec<TrailMedia>,
    /// Cover photo URL.
    #[serde(rename = "photo_couverture", default)]
    pub cover_photo: Option<String>,
    /// Relevance score assigned by the backend.
    #[serde(default)]
    pub score: f64,
    /// Route instructions.
    #[serde(default)]
    pub instructions: String,
    /// Line geometry.
    #[serde(default)]
    pub geometry: TrailGeometry,
    /// Parking area geometry.
    #[serde(rename = "parking_geometrie", default)]
    pub parking_geometry: Option<TrailGeometry>,
}

impl Trail {
    /// Minimal constructor used when only identity and geometry are known.
    #[must_use]
    pub fn minimal(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Vec<[f64; 2]>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geometry: TrailGeometry {
                kind: "LineString".to_string(),
                coordinates,
            },
            ..Self::default()
        }
    }
}

/// Query metadata echoed by the backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// Total matching trails.
    #[serde(default)]
    pub total: u64,
    /// Server-side processing time in seconds.
    #[serde(default)]
    pub time: f64,
    /// Echo of the interpreted parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Raw response of the conversation endpoint.
///
/// Across backend iterations the assistant reply has surfaced through a
/// prebuilt `messages` array, a top-level `response` string with structured
/// siblings, a `response` object, or a legacy `llm_response` summary.
/// [`crate::chat::normalize`] resolves the precedence.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching trails, replacing the previous result set wholesale.
    #[serde(default)]
    pub results: Vec<Trail>,
    /// Prebuilt conversation messages, when the backend returns them.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Assistant reply: string, object, or absent.
    #[serde(default)]
    pub response: serde_json::Value,
    /// Narrative synthesis accompanying a string `response`.
    #[serde(rename = "synthese", default)]
    pub synthesis: String,
    /// Closing remark accompanying a string `response`.
    #[serde(default)]
    pub conclusion: String,
    /// Recommended trails embedded in the reply.
    #[serde(rename = "recommandations", default)]
    pub recommendations: Vec<Trail>,
    /// All trails embedded in the reply.
    #[serde(rename = "randonnees", default)]
    pub all_trails: Vec<Trail>,
    /// Number of results announced in the reply.
    #[serde(rename = "nombre_resultats", default)]
    pub result_count: Option<u64>,
    /// Legacy structured summary.
    #[serde(rename = "llm_response", default)]
    pub llm_response: Option<SummaryContent>,
    /// Opaque conversation context to thread into the next request.
    #[serde(default)]
    pub context: serde_json::Value,
    /// Query metadata.
    #[serde(default)]
    pub metadata: Option<SearchMetadata>,
}

/// Accept either a single string or a list of strings.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(OneOrMany::One(s)) if s.is_empty() => Ok(Vec::new()),
        Some(OneOrMany::One(s)) => Ok(vec![s]),
        Some(OneOrMany::Many(v)) => Ok(v),
    }
}
