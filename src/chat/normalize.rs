//! Assistant payload normalization.
//!
//! The conversation endpoint has answered with at least four shapes across
//! backend iterations. Classification happens here, once, at the API
//! boundary; everything downstream matches on [`AssistantReply`] instead of
//! re-probing field presence.

use serde_json::Value;

use crate::api::types::SearchResponse;
use crate::chat::message::{Message, MessageContent, StructuredContent, SummaryContent};

/// Placeholder shown when the payload carries no usable reply. The
/// transcript never receives a null content.
pub const FALLBACK_TEXT: &str =
    "J'ai trouvé quelques randonnées qui pourraient vous intéresser.";

/// Fixed message appended when the request itself fails.
pub const ERROR_TEXT: &str =
    "Désolé, j'ai rencontré un problème lors de la recherche. Veuillez réessayer.";

/// Canonical, tagged form of the assistant reply.
#[derive(Clone, Debug)]
pub enum AssistantReply {
    /// The backend returned a prebuilt message list; its last element is
    /// used verbatim.
    Prebuilt(Message),
    /// Narrative content: `response` with optional synthesis, conclusion and
    /// embedded trails. This is the canonical contract going forward.
    Narrative(StructuredContent),
    /// Legacy `summary`/`analysis`/`highlights` shape.
    Summary(SummaryContent),
    /// Bare textual reply.
    Text(String),
    /// Nothing usable in the payload.
    Fallback,
}

impl AssistantReply {
    /// Classify a raw backend payload.
    ///
    /// Precedence: prebuilt messages, then a `response` field (object or
    /// string with structured siblings), then the legacy summary, then a
    /// bare string, then the fixed placeholder.
    #[must_use]
    pub fn classify(payload: &SearchResponse) -> Self {
        if let Some(last) = payload.messages.last() {
            return Self::Prebuilt(last.clone());
        }

        match &payload.response {
            Value::Object(_) => {
                if let Ok(content) =
                    serde_json::from_value::<StructuredContent>(payload.response.clone())
                {
                    return Self::Narrative(content);
                }
                if let Ok(summary) =
                    serde_json::from_value::<SummaryContent>(payload.response.clone())
                {
                    return Self::Summary(summary);
                }
                tracing::warn!("unrecognized response object shape, using fallback");
                Self::Fallback
            }
            Value::String(text) => {
                if payload.has_structured_siblings() {
                    Self::Narrative(StructuredContent {
                        response: text.clone(),
                        synthesis: payload.synthesis.clone(),
                        conclusion: payload.conclusion.clone(),
                        recommendations: payload.recommendations.clone(),
                        all_trails: payload.all_trails.clone(),
                        result_count: payload.result_count,
                    })
                } else {
                    Self::Text(text.clone())
                }
            }
            _ => payload
                .llm_response
                .clone()
                .map_or(Self::Fallback, Self::Summary),
        }
    }

    /// Turn the reply into the single assistant message appended to the
    /// transcript.
    #[must_use]
    pub fn into_message(self) -> Message {
        match self {
            Self::Prebuilt(message) => message,
            Self::Narrative(content) => Message::assistant(MessageContent::Structured(content)),
            Self::Summary(content) => Message::assistant(MessageContent::Summary(content)),
            Self::Text(text) => Message::assistant_text(text),
            Self::Fallback => Message::assistant_text(FALLBACK_TEXT),
        }
    }
}

impl SearchResponse {
    /// True when the payload carries structured siblings next to a string
    /// `response`.
    #[must_use]
    pub fn has_structured_siblings(&self) -> bool {
        !self.synthesis.is_empty()
            || !self.conclusion.is_empty()
            || !self.recommendations.is_empty()
            || !self.all_trails.is_empty()
            || self.result_count.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;

    fn payload(json: &str) -> SearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_prebuilt_messages_take_precedence() {
        let response = payload(
            r#"{
                "messages": [
                    { "role": "user", "content": "bonjour" },
                    { "role": "assistant", "content": "voici trois boucles" }
                ],
                "response": "ignored"
            }"#,
        );
        let reply = AssistantReply::classify(&response);
        match reply {
            AssistantReply::Prebuilt(message) => {
                assert_eq!(message.role, Role::Assistant);
                assert_eq!(message.content.display_text(), "voici trois boucles");
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_bare_string_response() {
        let response = payload(r#"{ "response": "Bonne marche !" }"#);
        assert!(matches!(
            AssistantReply::classify(&response),
            AssistantReply::Text(text) if text == "Bonne marche !"
        ));
    }

    #[test]
    fn test_string_response_with_siblings_becomes_narrative() {
        let response = payload(
            r#"{
                "response": "Deux résultats.",
                "synthese": "Des boucles courtes.",
                "recommandations": [{ "id_local": "T-9", "nom_itineraire": "Corniche" }]
            }"#,
        );
        match AssistantReply::classify(&response) {
            AssistantReply::Narrative(content) => {
                assert_eq!(content.response, "Deux résultats.");
                assert_eq!(content.synthesis, "Des boucles courtes.");
                assert_eq!(content.recommendations.len(), 1);
                assert!(content.conclusion.is_empty());
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_object_response_narrative() {
        let response = payload(
            r#"{ "response": { "response": "Voici.", "conclusion": "Bonne randonnée." } }"#,
        );
        assert!(matches!(
            AssistantReply::classify(&response),
            AssistantReply::Narrative(content) if content.conclusion == "Bonne randonnée."
        ));
    }

    #[test]
    fn test_object_response_legacy_summary() {
        let response = payload(
            r#"{ "response": { "summary": { "title": "Résultats", "results_count": 2 } } }"#,
        );
        assert!(matches!(
            AssistantReply::classify(&response),
            AssistantReply::Summary(content) if content.summary.results_count == 2
        ));
    }

    #[test]
    fn test_missing_reply_falls_back() {
        let response = payload(r#"{ "results": [] }"#);
        let reply = AssistantReply::classify(&response);
        assert!(matches!(reply, AssistantReply::Fallback));
        assert_eq!(reply.into_message().content.display_text(), FALLBACK_TEXT);
    }

    #[test]
    fn test_unrecognized_object_falls_back() {
        let response = payload(r#"{ "response": { "quelque": "chose" } }"#);
        assert!(matches!(
            AssistantReply::classify(&response),
            AssistantReply::Fallback
        ));
    }

    #[test]
    fn test_legacy_llm_response_field() {
        let response = payload(
            r#"{ "llm_response": { "summary": { "title": "Top 3", "results_count": 3 } } }"#,
        );
        assert!(matches!(
            AssistantReply::classify(&response),
            AssistantReply::Summary(_)
        ));
    }
}
