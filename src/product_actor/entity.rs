//! [`ActorEntity`] implementation for [`Product`].
//!
//! Drafts are validated here, at the API boundary, so the catalog view never has to
//! cope with blank names or nonsensical prices.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductDraft, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Rejects drafts the catalog cannot display sensibly.
pub fn validate(draft: &ProductDraft) -> Result<(), ProductError> {
    if draft.name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        return Err(ProductError::InvalidPrice(draft.price));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductDraft;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate(&params.draft)?;
        let ProductCreate { owner, draft } = params;
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            is_favorite: draft.is_favorite,
            image_url: draft.image_url,
            owner,
        })
    }

    /// Replaces every editable field. The image is only replaced when the draft
    /// carries one.
    async fn on_update(&mut self, draft: ProductDraft, _ctx: &()) -> Result<(), Self::Error> {
        validate(&draft)?;
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.category = draft.category;
        self.is_favorite = draft.is_favorite;
        if draft.image_url.is_some() {
            self.image_url = draft.image_url;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::SetFavorite(is_favorite) => {
                self.is_favorite = is_favorite;
                Ok(ProductActionResult::FavoriteSet(self.is_favorite))
            }
        }
    }
}
