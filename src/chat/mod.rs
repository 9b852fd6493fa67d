//! Conversation transcript and assistant payload handling.
//!
//! The backend's reply shape is not fixed; [`normalize`] classifies it once
//! into a tagged [`normalize::AssistantReply`], and [`session::ChatSession`]
//! keeps the append-only transcript consistent across optimistic sends,
//! stale responses and network failures.

pub mod message;
pub mod normalize;
pub mod session;

pub use message::{Message, MessageContent, Role};
pub use normalize::AssistantReply;
pub use session::ChatSession;
