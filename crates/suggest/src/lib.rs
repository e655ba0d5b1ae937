//! # Suggestion Engine
//!
//! Derives the set of suggested documents from a conversation transcript by
//! scanning the message text for keyword-index matches. The derivation is a
//! synchronous pure function: append a message, then call [`SuggestionEngine::suggest`]
//! (or [`suggest_documents`]) to get the refreshed set.

mod engine;
mod message;

pub use engine::{suggest_documents, SuggestionEngine};
pub use message::{ConversationMessage, Role};
