//! Conversation message model.
//!
//! The backend never tags its content union; the shapes below are
//! discriminated structurally (string vs object, presence of `response` or
//! `summary`), so the serde representation is untagged with required
//! discriminating fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::Trail;
use crate::text;

/// Role of a conversation message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Visitor input.
    User,
    /// Assistant reply.
    Assistant,
    /// System prompt.
    System,
}

impl Role {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            "system" => Ok(Self::System),
            _ => Err(value.to_string()),
        }
    }
}

/// Narrative structured content: a textual response with optional synthesis,
/// conclusion and embedded trail lists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StructuredContent {
    /// Main textual response. Required; it discriminates this shape.
    pub response: String,
    /// Synthesis of the search.
    #[serde(rename = "synthese", default)]
    pub synthesis: String,
    /// Closing remark.
    #[serde(default)]
    pub conclusion: String,
    /// Recommended trails.
    #[serde(rename = "recommandations", default)]
    pub recommendations: Vec<Trail>,
    /// All matching trails.
    #[serde(rename = "randonnees", default)]
    pub all_trails: Vec<Trail>,
    /// Announced result count.
    #[serde(rename = "nombre_resultats", default)]
    pub result_count: Option<u64>,
}

impl StructuredContent {
    /// Trails to surface for this content: recommendations first, otherwise
    /// the full embedded list.
    #[must_use]
    pub fn surfaced_trails(&self) -> &[Trail] {
        if self.recommendations.is_empty() {
            &self.all_trails
        } else {
            &self.recommendations
        }
    }
}

/// Header of a legacy summary reply.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SummaryHeader {
    /// Reply title.
    #[serde(default)]
    pub title: String,
    /// How the query was interpreted.
    #[serde(default)]
    pub interpretation: String,
    /// Comparison between results.
    #[serde(rename = "comparaison", default)]
    pub comparison: String,
    /// Result count.
    #[serde(default)]
    pub results_count: u64,
}

/// Analysis block of a legacy summary reply.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SummaryAnalysis {
    /// Key points of the result set.
    #[serde(default)]
    pub main_points: Vec<String>,
    /// Query refinement suggestions.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Trail recommendations.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A highlighted trail in a legacy summary reply.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SummaryHighlight {
    /// Trail id.
    #[serde(default)]
    pub id: String,
    /// Highlight text.
    #[serde(default)]
    pub text: String,
}

/// Legacy structured summary content (`summary`/`analysis`/`highlights`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryContent {
    /// Summary header. Required; it discriminates this shape.
    pub summary: SummaryHeader,
    /// Analysis block.
    #[serde(default)]
    pub analysis: SummaryAnalysis,
    /// Highlighted trails.
    #[serde(default)]
    pub highlights: Vec<SummaryHighlight>,
}

/// Content union of a conversation message.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text.
    Text(String),
    /// Narrative structured content.
    Structured(StructuredContent),
    /// Legacy structured summary.
    Summary(SummaryContent),
}

impl MessageContent {
    /// Render the content as display text for a non-HTML front-end.
    ///
    /// Branches on shape exactly once; every variant renders without
    /// panicking even when optional parts are empty.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Structured(content) => {
                let mut out = String::new();
                push_paragraph(&mut out, &content.response);
                push_paragraph(&mut out, &content.synthesis);
                for trail in content.surfaced_trails() {
                    out.push_str(&format!(
                        "\n  - {} ({}, {}, {})",
                        text::clean_text(&trail.name),
                        text::format_distance(trail.distance_m),
                        text::format_duration(trail.duration_h),
                        if trail.difficulty.is_empty() {
                            "difficulté inconnue"
                        } else {
                            &trail.difficulty
                        },
                    ));
                }
                if !content.surfaced_trails().is_empty() {
                    out.push('\n');
                }
                push_paragraph(&mut out, &content.conclusion);
                out.trim_end().to_string()
            }
            Self::Summary(content) => {
                let mut out = String::new();
                push_paragraph(&mut out, &content.summary.title);
                push_paragraph(&mut out, &content.summary.interpretation);
                for point in &content.analysis.main_points {
                    out.push_str(&format!("\n  - {point}"));
                }
                if !content.analysis.main_points.is_empty() {
                    out.push('\n');
                }
                for highlight in &content.highlights {
                    out.push_str(&format!("\n  * {}", highlight.text));
                }
                out.trim_end().to_string()
            }
        }
    }

    /// Trails embedded in the content, if any.
    #[must_use]
    pub fn embedded_trails(&self) -> &[Trail] {
        match self {
            Self::Structured(content) => content.surfaced_trails(),
            Self::Text(_) | Self::Summary(_) => &[],
        }
    }
}

fn push_paragraph(out: &mut String, paragraph: &str) {
    if !paragraph.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(paragraph);
    }
}

/// A single conversation message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Who produced the message.
    pub role: Role,
    /// Message content.
    pub content: MessageContent,
    /// Client-side timestamp; absent on wire messages built by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Build a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
            timestamp: Some(Utc::now()),
        }
    }

    /// Build an assistant message with arbitrary content.
    #[must_use]
    pub fn assistant(content: MessageContent) -> Self {
        Self {
            role: Role::Assistant,
            content,
            timestamp: Some(Utc::now()),
        }
    }

    /// Build a plain-text assistant message.
    #[must_use]
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self::assistant(MessageContent::Text(text.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::User, Role::Assistant, Role::System] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("tool".parse::<Role>().is_err());
    }

    #[test]
    fn test_content_discriminates_on_shape() {
        let text: MessageContent = serde_json::from_str(r#""bonjour""#).unwrap();
        assert!(matches!(text, MessageContent::Text(_)));

        let structured: MessageContent =
            serde_json::from_str(r#"{ "response": "voici", "synthese": "deux boucles" }"#).unwrap();
        match structured {
            MessageContent::Structured(content) => {
                assert_eq!(content.response, "voici");
                assert_eq!(content.synthesis, "deux boucles");
                assert!(content.conclusion.is_empty());
                assert!(content.recommendations.is_empty());
            }
            other => panic!("unexpected shape: {other:?}"),
        }

        let summary: MessageContent = serde_json::from_str(
            r#"{ "summary": { "title": "Résultats", "results_count": 3 } }"#,
        )
        .unwrap();
        assert!(matches!(summary, MessageContent::Summary(_)));
    }

    #[test]
    fn test_display_text_with_empty_optionals() {
        let content = MessageContent::Structured(StructuredContent {
            response: "Trois randonnées trouvées.".to_string(),
            ..StructuredContent::default()
        });
        assert_eq!(content.display_text(), "Trois randonnées trouvées.");
    }

    #[test]
    fn test_display_text_lists_recommended_trails() {
        use crate::api::types::Trail;
        let mut trail = Trail::minimal("T-1", "Sentier du Can de l'Hospitalet", vec![[3.5, 44.2]]);
        trail.distance_m = 9400.0;
        trail.duration_h = 3.5;
        trail.difficulty = "Facile".to_string();

        let content = MessageContent::Structured(StructuredContent {
            response: "Voici ma recommandation.".to_string(),
            recommendations: vec![trail],
            ..StructuredContent::default()
        });
        let rendered = content.display_text();
        assert!(rendered.contains("Sentier du Can de l'Hospitalet"));
        assert!(rendered.contains("9.4 km"));
        assert!(rendered.contains("3h30"));
    }

    #[test]
    fn test_message_wire_shape() {
        let message = Message::user("une boucle facile");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "une boucle facile");
    }
}
