//! # Product Repository
//!
//! The boundary between the dashboard and wherever products live. The dashboard only
//! ever calls [`ProductRepository::fetch_all`]; the other operations serve the add and
//! edit flows.
//!
//! Every call carries a [`SessionContext`]. A missing or unknown token is
//! [`RepositoryError::Auth`], a dead product service is [`RepositoryError::Network`].

pub mod error;
pub mod session;

pub use error::RepositoryError;
pub use session::{AuthToken, SessionContext, SessionRegistry};

use crate::clients::ProductClient;
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_actor::entity::validate;
use actor_framework::ActorClient;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Products scoped to the session's owner.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn fetch_all(&self, session: &SessionContext) -> Result<Vec<Product>, RepositoryError>;

    async fn fetch_one(
        &self,
        session: &SessionContext,
        id: ProductId,
    ) -> Result<Product, RepositoryError>;

    async fn create(
        &self,
        session: &SessionContext,
        draft: ProductDraft,
    ) -> Result<ProductId, RepositoryError>;

    async fn update(
        &self,
        session: &SessionContext,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, RepositoryError>;

    /// Persist the favorite flag; returns it as stored.
    async fn set_favorite(
        &self,
        session: &SessionContext,
        id: ProductId,
        is_favorite: bool,
    ) -> Result<bool, RepositoryError>;

    async fn delete(&self, session: &SessionContext, id: ProductId) -> Result<(), RepositoryError>;
}

/// [`ProductRepository`] backed by the product actor.
///
/// Owner scoping happens here: products of other users behave as if they did not
/// exist.
#[derive(Clone)]
pub struct CatalogRepository {
    products: ProductClient,
    sessions: SessionRegistry,
}

impl CatalogRepository {
    pub fn new(products: ProductClient, sessions: SessionRegistry) -> Self {
        Self { products, sessions }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Resolve the owner and fetch `id`, hiding foreign products.
    async fn owned(
        &self,
        session: &SessionContext,
        id: ProductId,
    ) -> Result<(String, Product), RepositoryError> {
        let owner = self.sessions.resolve(session)?;
        match self.products.get(id).await? {
            Some(product) if product.owner == owner => Ok((owner, product)),
            Some(_) => {
                debug!(%id, %owner, "Foreign product hidden");
                Err(RepositoryError::NotFound(id.to_string()))
            }
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }
}

#[async_trait]
impl ProductRepository for CatalogRepository {
    #[instrument(skip(self, session))]
    async fn fetch_all(&self, session: &SessionContext) -> Result<Vec<Product>, RepositoryError> {
        let owner = self.sessions.resolve(session)?;
        let products: Vec<Product> = self
            .products
            .list()
            .await
            .map_err(|e| {
                warn!(error = %e, "Fetch failed");
                RepositoryError::from(e)
            })?
            .into_iter()
            .filter(|p| p.owner == owner)
            .collect();
        info!(%owner, count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self, session))]
    async fn fetch_one(
        &self,
        session: &SessionContext,
        id: ProductId,
    ) -> Result<Product, RepositoryError> {
        let (_, product) = self.owned(session, id).await?;
        Ok(product)
    }

    #[instrument(skip(self, session, draft))]
    async fn create(
        &self,
        session: &SessionContext,
        draft: ProductDraft,
    ) -> Result<ProductId, RepositoryError> {
        let owner = self.sessions.resolve(session)?;
        validate(&draft)?;
        let id = self.products.create_product(&owner, draft).await?;
        info!(%id, %owner, "Product created");
        Ok(id)
    }

    #[instrument(skip(self, session, draft))]
    async fn update(
        &self,
        session: &SessionContext,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, RepositoryError> {
        self.owned(session, id).await?;
        validate(&draft)?;
        Ok(self.products.update_product(id, draft).await?)
    }

    #[instrument(skip(self, session))]
    async fn set_favorite(
        &self,
        session: &SessionContext,
        id: ProductId,
        is_favorite: bool,
    ) -> Result<bool, RepositoryError> {
        self.owned(session, id).await?;
        Ok(self.products.set_favorite(id, is_favorite).await?)
    }

    #[instrument(skip(self, session))]
    async fn delete(&self, session: &SessionContext, id: ProductId) -> Result<(), RepositoryError> {
        let (owner, _) = self.owned(session, id).await?;
        self.products.delete(id).await?;
        info!(%id, %owner, "Product deleted");
        Ok(())
    }
}
