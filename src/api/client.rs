//! HTTP client for the conversation endpoint.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{SearchMetadata, SearchResponse, Trail};
use crate::chat::message::Message;
use crate::chat::normalize::AssistantReply;
use crate::config::AppConfig;

/// Path of the conversation endpoint, relative to the base URL.
const CONVERSATION_PATH: &str = "conversation/";

/// Request body of the conversation endpoint.
#[derive(Debug, Serialize)]
struct ConversationRequest<'a> {
    /// Full transcript, latest user utterance last.
    messages: &'a [Message],
    /// Previous result set, so the backend can refine rather than restart.
    resultats: &'a [Trail],
    /// Opaque context returned by the previous turn.
    context: &'a Value,
}

/// Normalized outcome of one conversation turn.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Trails replacing the previous result set wholesale.
    pub results: Vec<Trail>,
    /// Assistant reply, classified once on ingress.
    pub reply: AssistantReply,
    /// Context to thread into the next request.
    pub context: Value,
    /// Query metadata, when provided.
    pub metadata: Option<SearchMetadata>,
}

impl SearchOutcome {
    /// Normalize a raw backend payload.
    #[must_use]
    pub fn from_response(response: SearchResponse) -> Self {
        let reply = AssistantReply::classify(&response);
        // Some backends put the trail set under `randonnees` instead of
        // `results`.
        let results = if response.results.is_empty() {
            response.all_trails
        } else {
            response.results
        };
        Self {
            results,
            reply,
            context: response.context,
            metadata: response.metadata,
        }
    }
}

/// Backend seam for one conversation turn. The terminal client uses the
/// HTTP implementation; tests use in-memory fakes.
#[async_trait]
pub trait ConversationApi: Send + Sync {
    /// Send the transcript plus prior results and context; receive the
    /// normalized outcome.
    ///
    /// # Errors
    /// Returns an error if the request fails, times out, or the payload
    /// cannot be decoded.
    async fn converse(
        &self,
        messages: &[Message],
        results: &[Trail],
        context: &Value,
    ) -> ApiResult<SearchOutcome>;
}

/// HTTP client for the search backend.
#[derive(Clone, Debug)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    /// Build a client from the application config.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        let base = Url::parse(&config.api_base_url)?;
        let endpoint = base.join(CONVERSATION_PATH)?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { http, endpoint })
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ConversationApi for SearchClient {
    async fn converse(
        &self,
        messages: &[Message],
        results: &[Trail],
        context: &Value,
    ) -> ApiResult<SearchOutcome> {
        let body = ConversationRequest {
            messages,
            resultats: results,
            context,
        };

        tracing::debug!(endpoint = %self.endpoint, messages = messages.len(), "sending conversation turn");

        let response = self.http.post(self.endpoint.clone()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status));
        }

        let payload: SearchResponse = response.json().await?;
        Ok(SearchOutcome::from_response(payload))
    }
}
