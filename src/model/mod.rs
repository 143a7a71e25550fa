//! Pure data structures shared by the product actor, the repository and the catalog view.

pub mod product;

pub use product::*;
