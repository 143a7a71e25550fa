//! Error types for the Product actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// A product needs a non-blank name.
    #[error("Product name must not be empty")]
    EmptyName,

    /// Prices are finite and non-negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The actor rejected the request; carries the entity's own message.
    #[error("Product rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => ProductError::Rejected(inner.to_string()),
            transport => ProductError::ActorCommunicationError(transport.to_string()),
        }
    }
}

impl ProductError {
    /// True when the request never got a real answer from the actor.
    pub fn is_communication_failure(&self) -> bool {
        matches!(self, ProductError::ActorCommunicationError(_))
    }
}
