//! Error types for the order lifecycle.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PizzeriaError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// An error occurred while communicating with the order actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The order actor did not stop cleanly.
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
