//! # Catalog Dashboard
//!
//! A product catalog behind a resource actor, and the client-side view that browses it.
//!
//! The interesting part is the derived view: the dashboard keeps the full product
//! collection and derives the visible page from a search term, a category, a
//! favorites-only switch, a price ordering and a page number. See [`catalog`].
//!
//! ## Module Tour
//!
//! ### 1. The View ([`catalog`], [`dashboard`])
//! - [`catalog::derive_view`] filters, sorts and paginates in one pure call.
//! - [`catalog::ViewController`] owns the collection and the [`catalog::ViewState`] and
//!   keeps the page in range across every transition.
//! - [`dashboard::Dashboard`] mounts the view with a single fetch and turns failures into
//!   user-facing messages.
//!
//! ### 2. The Boundary ([`repository`])
//! [`repository::ProductRepository`] is what the dashboard fetches from. Every call
//! carries an explicit [`repository::SessionContext`]; nothing reads ambient auth state.
//!
//! ### 3. The Service ([`product_actor`], [`clients`], [`model`])
//! Products live in a [`ResourceActor`](actor_framework::ResourceActor) and are reached
//! through [`clients::ProductClient`].
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`lifecycle::CatalogSystem`] starts the actor and wires everything to it;
//! [`config::CatalogConfig`] reads `CATALOG_*` environment variables.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CATALOG_PAGE_SIZE=3 CATALOG_DEFAULT_SORT=desc RUST_LOG=debug cargo run
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod repository;
