//! # Product Actor
//!
//! The in-process product API: a [`ResourceActor`] holding every product, with the
//! favorite flag exposed as a custom action.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation and draft validation
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - factory for the actor and its client

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
