//! Represents a product in the catalog.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait so the
//! in-process product API can keep it in a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductDraft`])
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
//!
//! Field names serialize the way the product API spells them (`is_favorite`,
//! `image_url`, `owner_username`).
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Free-form; an empty string means "uncategorized".
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_favorite: bool,
    /// Opaque reference handed out by the API, never interpreted here.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "owner_username")]
    pub owner: String,
}

impl Product {
    /// Creates a non-favorite product without description, image or owner.
    pub fn new(id: u32, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            is_favorite: false,
            image_url: None,
            owner: String::new(),
        }
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }
}

/// The editable part of a product, as submitted by the add and edit forms.
///
/// Used both to create a product and to replace one wholesale. An update whose
/// `image_url` is `None` keeps the stored image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            is_favorite: false,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Payload of a Create request: the draft plus the owner the API assigns.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub owner: String,
    pub draft: ProductDraft,
}
