//! # System lifecycle
//!
//! [`CatalogSystem`] starts the product actor and wires the repository and session
//! registry to it. Actors stop when the last client is dropped, so
//! [`CatalogSystem::shutdown`] drops its clients and then awaits the actor tasks.
//!
//! [`setup_tracing`] initializes logging for binaries.

mod catalog_system;
mod tracing;

pub use self::tracing::setup_tracing;
pub use catalog_system::CatalogSystem;

use crate::config::ConfigError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Failures at the application level.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
