//! # Tracing setup
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//!
//! ```bash
//! # Fetch outcomes, actor lifecycle, repository calls
//! RUST_LOG=info cargo run
//!
//! # Also every view transition and actor request payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a demo run reads roughly like:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Session opened username="alice"
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO fetch_all: Fetched products owner="alice" count=7
//! INFO mount: Dashboard loaded count=7
//! ```
//!
//! Request payloads are logged once, at `debug`, where they enter the system
//! (`debug!(?draft, "create_product called")`).

/// Install the global subscriber. Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type carries the context instead
        .compact()
        .init();
}
