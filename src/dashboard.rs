//! # Dashboard
//!
//! One mounted catalog page: a single fetch through a [`ProductRepository`], then every
//! user input goes to the [`ViewController`]. Favorite toggles and deletes stay local.

use crate::catalog::{PageResult, SortOrder, ViewController, ViewEvent};
use crate::config::CatalogConfig;
use crate::model::ProductId;
use crate::repository::{ProductRepository, RepositoryError, SessionContext};
use tracing::{info, instrument, warn};

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized! Please log in.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";
pub const EMPTY_MESSAGE: &str = "No products found.";

/// Outcome of the mount-time fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loaded {
        count: usize,
    },
    Failed(RepositoryError),
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    controller: ViewController,
    load_state: LoadState,
}

impl Dashboard {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            controller: ViewController::from_config(config),
            load_state: LoadState::Idle,
        }
    }

    /// Fetch the session's products once and feed them to the view.
    ///
    /// On failure the collection is left as it was and the error is kept for
    /// [`error_message`](Self::error_message). Nothing is retried.
    #[instrument(skip_all)]
    pub async fn mount<R>(&mut self, repository: &R, session: &SessionContext) -> &LoadState
    where
        R: ProductRepository + ?Sized,
    {
        self.load_state = match repository.fetch_all(session).await {
            Ok(products) => {
                let count = products.len();
                info!(count, "Dashboard loaded");
                self.controller.on_collection_loaded(products);
                LoadState::Loaded { count }
            }
            Err(e) => {
                warn!(error = %e, reauth = e.requires_reauth(), "Dashboard load failed");
                LoadState::Failed(e)
            }
        };
        &self.load_state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// User-facing text for a failed load.
    pub fn error_message(&self) -> Option<&'static str> {
        match &self.load_state {
            LoadState::Failed(RepositoryError::Auth(_)) => Some(UNAUTHORIZED_MESSAGE),
            LoadState::Failed(_) => Some(FETCH_FAILED_MESSAGE),
            _ => None,
        }
    }

    /// Placeholder shown instead of the grid when the current filters match nothing.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.controller.total_pages() == 0).then_some(EMPTY_MESSAGE)
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        self.controller.dispatch(event);
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.controller.on_search_changed(text);
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.controller.on_category_changed(category);
    }

    pub fn sort_by_price(&mut self, order: SortOrder) {
        self.controller.on_sort_changed(order);
    }

    pub fn toggle_favorites_only(&mut self) {
        self.controller.on_favorites_toggle();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.controller.on_page_changed(page);
    }

    pub fn toggle_favorite(&mut self, id: ProductId) {
        self.controller.on_favorite_toggled(id);
    }

    pub fn delete_product(&mut self, id: ProductId) {
        self.controller.on_product_deleted(id);
    }

    pub fn view(&self) -> PageResult<'_> {
        self.controller.view()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.controller.categories()
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductDraft};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers `fetch_all` with a canned result and counts every call.
    struct CannedRepository {
        result: Result<Vec<Product>, RepositoryError>,
        calls: AtomicUsize,
    }

    impl CannedRepository {
        fn new(result: Result<Vec<Product>, RepositoryError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn unexpected(&self) -> RepositoryError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            RepositoryError::Rejected("unexpected call".to_string())
        }
    }

    #[async_trait]
    impl ProductRepository for CannedRepository {
        async fn fetch_all(&self, _: &SessionContext) -> Result<Vec<Product>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn fetch_one(&self, _: &SessionContext, _: ProductId) -> Result<Product, RepositoryError> {
            Err(self.unexpected())
        }

        async fn create(
            &self,
            _: &SessionContext,
            _: ProductDraft,
        ) -> Result<ProductId, RepositoryError> {
            Err(self.unexpected())
        }

        async fn update(
            &self,
            _: &SessionContext,
            _: ProductId,
            _: ProductDraft,
        ) -> Result<Product, RepositoryError> {
            Err(self.unexpected())
        }

        async fn set_favorite(
            &self,
            _: &SessionContext,
            _: ProductId,
            _: bool,
        ) -> Result<bool, RepositoryError> {
            Err(self.unexpected())
        }

        async fn delete(&self, _: &SessionContext, _: ProductId) -> Result<(), RepositoryError> {
            Err(self.unexpected())
        }
    }

    fn furniture() -> Vec<Product> {
        vec![
            Product::new(1, "Chair", 50.0, "Furniture"),
            Product::new(2, "Table", 30.0, "Furniture").favorite(true),
            Product::new(3, "Lamp", 20.0, "Lighting"),
        ]
    }

    #[tokio::test]
    async fn mount_loads_the_collection() {
        let repo = CannedRepository::new(Ok(furniture()));
        let mut dashboard = Dashboard::new(&CatalogConfig::default());

        let state = dashboard.mount(&repo, &SessionContext::anonymous()).await;
        assert_eq!(state, &LoadState::Loaded { count: 3 });
        assert_eq!(dashboard.view().items.len(), 3);
        assert_eq!(dashboard.categories(), vec!["Furniture", "Lighting"]);
        assert_eq!(dashboard.error_message(), None);
    }

    #[tokio::test]
    async fn auth_failure_shows_login_prompt_and_empty_view() {
        let repo = CannedRepository::new(Err(RepositoryError::Auth("missing session token".into())));
        let mut dashboard = Dashboard::new(&CatalogConfig::default());

        dashboard.mount(&repo, &SessionContext::anonymous()).await;
        assert_eq!(dashboard.error_message(), Some(UNAUTHORIZED_MESSAGE));
        assert!(dashboard.view().is_empty());
        assert_eq!(dashboard.empty_message(), Some(EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn network_failure_is_not_retried() {
        let repo = CannedRepository::new(Err(RepositoryError::Network("Actor closed".into())));
        let mut dashboard = Dashboard::new(&CatalogConfig::default());

        dashboard.mount(&repo, &SessionContext::anonymous()).await;
        assert_eq!(dashboard.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn failed_refetch_keeps_the_previous_collection() {
        let loaded = CannedRepository::new(Ok(furniture()));
        let broken = CannedRepository::new(Err(RepositoryError::Network("Actor closed".into())));
        let mut dashboard = Dashboard::new(&CatalogConfig::default());
        let session = SessionContext::anonymous();

        dashboard.mount(&loaded, &session).await;
        dashboard.search("a");
        let names = |d: &Dashboard| -> Vec<String> {
            d.view().items.iter().map(|p| p.name.clone()).collect()
        };
        let before = names(&dashboard);

        let state = dashboard.mount(&broken, &session).await;
        assert!(matches!(state, LoadState::Failed(RepositoryError::Network(_))));
        assert_eq!(names(&dashboard), before);
        assert_eq!(dashboard.categories(), vec!["Furniture", "Lighting"]);
        assert_eq!(dashboard.controller().store().len(), 3);
        assert_eq!(dashboard.error_message(), Some(FETCH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn local_mutations_never_reach_the_repository() {
        let repo = CannedRepository::new(Ok(furniture()));
        let mut dashboard = Dashboard::new(&CatalogConfig::default());
        dashboard.mount(&repo, &SessionContext::anonymous()).await;

        dashboard.toggle_favorite(ProductId(1));
        dashboard.delete_product(ProductId(3));

        assert_eq!(repo.calls(), 1);
        let names: Vec<String> = dashboard.view().items.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Table", "Chair"]);
        assert!(dashboard.controller().store().get(ProductId(1)).unwrap().is_favorite);
    }
}
