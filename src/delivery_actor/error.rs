//! Error types for delivery operations.

use thiserror::Error;

/// Errors that can occur while creating, reading, or updating deliveries.
///
/// `NotFound` and `Validation` propagate to callers (an HTTP layer would map
/// them to 404 and 400). `Decode` and `Persist` arise on the queue ingestion
/// path, where they are logged rather than propagated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// The requested delivery does not exist.
    #[error("Delivery not found: {0}")]
    NotFound(String),

    /// The delivery data provided is invalid.
    #[error("Invalid delivery data: {0}")]
    Validation(String),

    /// A queue payload could not be decoded into an order event.
    #[error("Malformed order event: {0}")]
    Decode(String),

    /// The record could not be written to the store.
    #[error("Failed to persist delivery: {0}")]
    Persist(String),
}
