//! # Product Client
//!
//! High-level API over a `ResourceClient<Product>`: typed create/update/favorite calls
//! plus the `get`, `list` and `delete` inherited from [`ActorClient`].
use crate::model::{Product, ProductCreate, ProductDraft, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self, draft))]
    pub async fn create_product(
        &self,
        owner: &str,
        draft: ProductDraft,
    ) -> Result<ProductId, ProductError> {
        debug!(?draft, "create_product called");
        let params = ProductCreate {
            owner: owner.to_string(),
            draft,
        };
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Replace the editable fields of a product; returns the stored result.
    #[instrument(skip(self, draft))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        debug!(?draft, "update_product called");
        self.inner.update(id, draft).await.map_err(ProductError::from)
    }

    /// Persist the favorite flag. Returns the flag as stored.
    #[instrument(skip(self))]
    pub async fn set_favorite(&self, id: ProductId, is_favorite: bool) -> Result<bool, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::SetFavorite(is_favorite))
            .await
        {
            Ok(ProductActionResult::FavoriteSet(stored)) => Ok(stored),
            Err(e) => Err(ProductError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, expect_create};

    #[tokio::test]
    async fn test_set_favorite_sends_action_and_returns_stored_flag() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.set_favorite(ProductId(3), true).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(3));
        assert_eq!(action, ProductAction::SetFavorite(true));

        responder
            .send(Ok(ProductActionResult::FavoriteSet(true)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_create_product_attaches_owner() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .create_product("alice", ProductDraft::new("Chair", 50.0, "Furniture"))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.owner, "alice");
        assert_eq!(params.draft.name, "Chair");

        responder.send(Ok(ProductId(1))).unwrap();
        assert_eq!(task.await.unwrap(), Ok(ProductId(1)));
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.set_favorite(ProductId(9), false).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound("product_9".to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::NotFound("product_9".to_string()))
        );
    }
}
