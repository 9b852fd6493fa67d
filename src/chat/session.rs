//! Transcript controller.
//!
//! The transcript is append-only and replaced wholesale on every turn: a
//! turn appends the user message immediately (optimistic update), then
//! exactly one assistant message once the request settles — normalized
//! reply, fallback, or the fixed error text. A per-send sequence number
//! drops replies that settle after a newer submission.

use crate::api::error::ApiError;
use crate::chat::message::Message;
use crate::chat::normalize::{AssistantReply, ERROR_TEXT};

/// Default greeting seeded into a fresh transcript.
pub const GREETING_TEXT: &str = "Bonjour ! Je suis votre assistant de randonnée \
dans les Cévennes. Comment puis-je vous aider aujourd'hui ?";

/// Token identifying one in-flight send.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SendToken {
    seq: u64,
}

/// Append-only conversation transcript with turn lifecycle tracking.
#[derive(Debug)]
pub struct ChatSession {
    transcript: Vec<Message>,
    loading: bool,
    seq: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create a session seeded with the assistant greeting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transcript: vec![Message::assistant_text(GREETING_TEXT)],
            loading: false,
            seq: 0,
        }
    }

    /// Create an empty session, without greeting.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            transcript: Vec::new(),
            loading: false,
            seq: 0,
        }
    }

    /// Current transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Begin a turn: append the user message and mark the session loading.
    ///
    /// Returns `None` for blank input, which is ignored. The user message is
    /// visible in the transcript before any network activity starts.
    pub fn begin_send(&mut self, input: &str) -> Option<SendToken> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Replace the array wholesale rather than mutating in place.
        let mut next = self.transcript.clone();
        next.push(Message::user(trimmed));
        self.transcript = next;

        self.loading = true;
        self.seq += 1;
        Some(SendToken { seq: self.seq })
    }

    /// True when no newer send superseded this token.
    #[must_use]
    pub const fn is_current(&self, token: SendToken) -> bool {
        token.seq == self.seq
    }

    /// Settle a turn: append exactly one assistant message.
    ///
    /// A stale token (superseded by a newer send) is dropped without
    /// touching the transcript or the loading flag of the newer turn. The
    /// loading flag is cleared on every non-stale path, success or failure.
    pub fn complete(&mut self, token: SendToken, outcome: Result<AssistantReply, ApiError>) {
        if !self.is_current(token) {
            tracing::debug!(seq = token.seq, "dropping stale conversation reply");
            return;
        }

        self.loading = false;

        let message = match outcome {
            Ok(reply) => reply.into_message(),
            Err(error) => {
                tracing::error!("conversation request failed: {error}");
                Message::assistant_text(ERROR_TEXT)
            }
        };

        let mut next = self.transcript.clone();
        next.push(message);
        self.transcript = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;
    use crate::chat::normalize::FALLBACK_TEXT;

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::Assistant);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.begin_send("   ").is_none());
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_user_message_appended_before_settle() {
        let mut session = ChatSession::new();
        let token = session.begin_send("une boucle facile").unwrap();
        // Optimistic update: +1 before the request resolves.
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].role, Role::User);
        assert!(session.is_loading());
        assert!(session.is_current(token));
    }

    #[test]
    fn test_successful_turn_appends_exactly_one_reply() {
        let mut session = ChatSession::new();
        let token = session.begin_send("cascade").unwrap();
        session.complete(token, Ok(AssistantReply::Text("Voici.".to_string())));
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[2].content.display_text(), "Voici.");
        assert!(!session.is_loading());
    }

    #[test]
    fn test_failed_turn_appends_error_and_clears_loading() {
        let mut session = ChatSession::new();
        let before = session.transcript().to_vec();
        let token = session.begin_send("cascade").unwrap();
        session.complete(token, Err(ApiError::Timeout));

        assert_eq!(session.transcript().len(), before.len() + 2);
        let last = session.transcript().last().unwrap();
        assert_eq!(last.content.display_text(), ERROR_TEXT);
        assert!(!session.is_loading());
        // Prior messages are preserved untouched.
        assert_eq!(
            session.transcript()[0].content.display_text(),
            before[0].content.display_text()
        );
    }

    #[test]
    fn test_fallback_reply_never_yields_empty_content() {
        let mut session = ChatSession::new();
        let token = session.begin_send("rien").unwrap();
        session.complete(token, Ok(AssistantReply::Fallback));
        assert_eq!(
            session.transcript().last().unwrap().content.display_text(),
            FALLBACK_TEXT
        );
    }

    #[test]
    fn test_stale_reply_is_dropped() {
        let mut session = ChatSession::new();
        let first = session.begin_send("première").unwrap();
        let second = session.begin_send("deuxième").unwrap();
        assert!(!session.is_current(first));

        // The stale settle must not append nor clear the newer turn's flag.
        session.complete(first, Ok(AssistantReply::Text("périmé".to_string())));
        assert_eq!(session.transcript().len(), 3);
        assert!(session.is_loading());

        session.complete(second, Ok(AssistantReply::Text("actuel".to_string())));
        assert_eq!(session.transcript().len(), 4);
        assert_eq!(
            session.transcript().last().unwrap().content.display_text(),
            "actuel"
        );
        assert!(!session.is_loading());
    }
}
