//! Text cleaning and display formatting helpers.
//!
//! The backend serves descriptions with HTML entities and markup inherited
//! from the park's Geotrek database; these helpers normalize them for
//! display. All functions are pure.

use std::sync::LazyLock;

use regex::Regex;

/// Common HTML entities found in Geotrek trail descriptions.
const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&eacute;", "é"),
    ("&egrave;", "è"),
    ("&agrave;", "à"),
    ("&ecirc;", "ê"),
    ("&ocirc;", "ô"),
    ("&icirc;", "î"),
    ("&acirc;", "â"),
    ("&ucirc;", "û"),
    ("&ccedil;", "ç"),
    ("&euml;", "ë"),
    ("&iuml;", "ï"),
    ("&uuml;", "ü"),
    ("&deg;", "°"),
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&euro;", "€"),
    ("&oelig;", "œ"),
    ("&aelig;", "æ"),
    ("&rsquo;", "'"),
    // `&amp;` last so it does not re-expand other entities.
    ("&amp;", "&"),
];

#[allow(clippy::unwrap_used)]
static BR_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

#[allow(clippy::unwrap_used)]
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

#[allow(clippy::unwrap_used)]
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Clean a trail description: decode HTML entities, strip markup and
/// normalize whitespace.
#[must_use]
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = text.to_string();
    for (entity, replacement) in HTML_ENTITIES {
        if cleaned.contains(entity) {
            cleaned = cleaned.replace(entity, replacement);
        }
    }

    let cleaned = BR_TAG.replace_all(&cleaned, "\n");
    let cleaned = HTML_TAG.replace_all(&cleaned, "");
    WHITESPACE_RUN.replace_all(&cleaned, " ").trim().to_string()
}

/// Format a duration in hours as `"2h30"`, or `"45min"` under one hour.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0min".to_string();
    }
    let mut h = hours.floor() as u64;
    let mut m = ((hours - hours.floor()) * 60.0).round() as u64;
    if m == 60 {
        h += 1;
        m = 0;
    }
    if h > 0 {
        if m > 0 {
            format!("{h}h{m:02}")
        } else {
            format!("{h}h")
        }
    } else {
        format!("{m}min")
    }
}

/// Format a distance in meters as kilometers with one decimal, e.g. `"12.3 km"`.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

/// Pictogram for a practice type (pédestre, VTT, ...).
#[must_use]
pub fn practice_icon(practice: &str) -> &'static str {
    match practice {
        "pédestre" => "🚶",
        "trail" => "🏃",
        "VTT" => "🚵",
        "cyclo" => "🚴",
        "gravel" => "🚲",
        "équestre" => "🐎",
        "ski de fond" => "⛷️",
        "ski de rando" => "🎿",
        "raquettes" => "❄️",
        _ => "➡️",
    }
}

/// Badge color classes for a difficulty label, reusable by any web renderer.
#[must_use]
pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty {
        "Très facile" => "bg-green-100 text-green-800 border-green-200",
        "Facile" => "bg-blue-100 text-blue-800 border-blue-200",
        "Moyen" | "Modéré" => "bg-yellow-100 text-yellow-800 border-yellow-200",
        "Difficile" => "bg-orange-100 text-orange-800 border-orange-200",
        "Très difficile" => "bg-red-100 text-red-800 border-red-200",
        _ => "bg-gray-100 text-gray-800 border-gray-200",
    }
}
