//! # Actor Framework
//!
//! Building blocks for resource actors: a tokio task that owns an ordered store of
//! entities and serves CRUD, listing and custom actions over a channel.
//!
//! The catalog dashboard uses one of these actors as its in-process product API. The
//! dashboard never touches the actor's store directly; it goes through a
//! [`ResourceClient`] (usually wrapped in a domain client implementing [`ActorClient`]).
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain model, DTOs, validation hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and exclusive state
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Example
//!
//! ```rust,ignore
//! let (actor, client) = ResourceActor::<Product>::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let id = client.create(draft).await?;
//! let all = client.list().await?;
//! ```
//!
//! ## Ordering
//!
//! The store is a `BTreeMap` keyed by `T::Id`. Ids are allocated from a monotonically
//! increasing counter, so [`ResourceClient::list`] returns entities in creation order.
//! Callers that derive views from a listing rely on that order being stable.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks around the store)
//! - Clients are cheap clones of an mpsc sender
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from a queue of
//! expectations, plus low-level helpers for asserting on raw requests.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
