//! Conversational career assistant.
//!
//! A turn flows through `engine::ConversationEngine::respond`: lock the user's
//! session, build an `intents::Turn`, run the ordered cascade, return the reply.

pub mod commands;
pub mod engine;
pub mod handlers;
pub mod history;
pub mod intents;
pub mod replies;
pub mod resume_lookup;
pub mod variation;
