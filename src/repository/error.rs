//! Errors surfaced by a [`ProductRepository`](super::ProductRepository).

use crate::product_actor::ProductError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// No session token, or one the registry does not know.
    #[error("Unauthorized: {0}")]
    Auth(String),

    /// The product service could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// Unknown id, or a product owned by somebody else.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The service refused the draft.
    #[error("Rejected: {0}")]
    Rejected(String),
}

impl RepositoryError {
    /// The user has to log in again before anything else will work.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, RepositoryError::Auth(_))
    }

    /// Trying again later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::Network(_))
    }
}

impl From<ProductError> for RepositoryError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => RepositoryError::NotFound(id),
            ProductError::ActorCommunicationError(reason) => RepositoryError::Network(reason),
            ProductError::Rejected(reason) => RepositoryError::Rejected(reason),
            invalid @ (ProductError::EmptyName | ProductError::InvalidPrice(_)) => {
                RepositoryError::Rejected(invalid.to_string())
            }
        }
    }
}
