//! # Framework Errors
//!
//! Common error types for the actor plumbing. Centralizing them keeps error
//! handling consistent across every actor and client in the system.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's request channel is closed; no more requests can be sent.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel before answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity with the given id exists in the store.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The entity's own logic rejected the operation.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
