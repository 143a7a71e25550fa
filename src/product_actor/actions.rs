//! Custom actions for the Product actor.
//!
//! Operations on a [`Product`](crate::model::Product) that are not plain CRUD. They are
//! handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Persists the favorite flag, mirroring the API's favorite endpoint.
    SetFavorite(bool),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The flag as stored after the action.
    FavoriteSet(bool),
}
