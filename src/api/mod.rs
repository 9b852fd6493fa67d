//! HTTP boundary with the conversational search backend.
//!
//! One endpoint is consumed: `POST {base}/conversation/`. The heterogeneous
//! payload it returns is normalized once, on ingress, into
//! [`client::SearchOutcome`]; nothing downstream ever re-probes raw JSON.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ConversationApi, SearchClient, SearchOutcome};
pub use error::{ApiError, ApiResult};
pub use types::{SearchResponse, Trail, TrailGeometry};
