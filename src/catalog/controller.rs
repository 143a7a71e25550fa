//! The state machine behind the dashboard view.

use super::paginate::Paginator;
use super::store::CollectionStore;
use super::view_state::{SortOrder, ViewState};
use super::{derive_view, filter_products, FilterCriteria, PageResult};
use crate::config::CatalogConfig;
use crate::model::{Product, ProductId};
use tracing::debug;

/// Every input the presentation layer can feed the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    CollectionLoaded(Vec<Product>),
    SearchChanged(String),
    CategoryChanged(String),
    SortChanged(SortOrder),
    FavoritesToggled,
    PageChanged(usize),
    FavoriteToggled(ProductId),
    ProductDeleted(ProductId),
}

/// Owns the collection and the view state for one dashboard session.
///
/// Every transition takes `&mut self` and leaves `current_page` clamped to the new
/// page count before returning, so [`view`](Self::view) always reflects one
/// consistent snapshot.
///
/// Control changes (search, category, favorites-only, sort) and fresh loads reset to
/// page 1. Local mutations keep the page unless it no longer exists.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    store: CollectionStore,
    state: ViewState,
    paginator: Paginator,
    total_pages: usize,
}

impl ViewController {
    pub fn new(paginator: Paginator) -> Self {
        Self {
            paginator,
            ..Self::default()
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut controller = Self::new(config.paginator());
        controller.state.sort_order = config.default_sort;
        controller
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::CollectionLoaded(products) => self.on_collection_loaded(products),
            ViewEvent::SearchChanged(text) => self.on_search_changed(text),
            ViewEvent::CategoryChanged(category) => self.on_category_changed(category),
            ViewEvent::SortChanged(order) => self.on_sort_changed(order),
            ViewEvent::FavoritesToggled => self.on_favorites_toggle(),
            ViewEvent::PageChanged(page) => self.on_page_changed(page),
            ViewEvent::FavoriteToggled(id) => self.on_favorite_toggled(id),
            ViewEvent::ProductDeleted(id) => self.on_product_deleted(id),
        }
    }

    pub fn on_collection_loaded(&mut self, products: Vec<Product>) {
        debug!(count = products.len(), "Collection loaded");
        self.store.load(products);
        self.reset_page();
    }

    pub fn on_search_changed(&mut self, text: impl Into<String>) {
        self.state.search_term = text.into();
        debug!(search = %self.state.search_term, "Search changed");
        self.reset_page();
    }

    pub fn on_category_changed(&mut self, category: impl Into<String>) {
        self.state.category_filter = category.into();
        debug!(category = %self.state.category_filter, "Category changed");
        self.reset_page();
    }

    pub fn on_sort_changed(&mut self, order: SortOrder) {
        self.state.sort_order = order;
        debug!(%order, "Sort changed");
        self.reset_page();
    }

    pub fn on_favorites_toggle(&mut self) {
        self.state.show_favorites_only = !self.state.show_favorites_only;
        debug!(favorites_only = self.state.show_favorites_only, "Favorites filter toggled");
        self.reset_page();
    }

    pub fn on_page_changed(&mut self, page: usize) {
        self.state.current_page = page;
        self.refresh();
        debug!(requested = page, current = self.state.current_page, "Page changed");
    }

    /// Flip a product's favorite flag locally. Unknown ids change nothing.
    pub fn on_favorite_toggled(&mut self, id: ProductId) {
        let changed = self.store.toggle_favorite(id);
        debug!(%id, changed, "Favorite toggled");
        self.refresh();
    }

    /// Drop a product locally. Unknown ids change nothing.
    pub fn on_product_deleted(&mut self, id: ProductId) {
        let changed = self.store.remove(id);
        debug!(%id, changed, "Product deleted");
        self.refresh();
    }

    /// The page to render right now.
    pub fn view(&self) -> PageResult<'_> {
        derive_view(self.store.products(), &self.state, self.paginator)
    }

    /// Category options, taken from the unfiltered collection.
    pub fn categories(&self) -> Vec<&str> {
        self.store.categories()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    fn reset_page(&mut self) {
        self.state.current_page = 1;
        self.refresh();
    }

    fn refresh(&mut self) {
        let matches =
            filter_products(self.store.products(), &FilterCriteria::from(&self.state)).len();
        self.total_pages = self.paginator.total_pages(matches);
        self.state.current_page = self.paginator.clamp_page(self.state.current_page, matches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn furniture() -> Vec<Product> {
        vec![
            Product::new(1, "Chair", 50.0, "Furniture"),
            Product::new(2, "Table", 30.0, "Furniture").favorite(true),
            Product::new(3, "Lamp", 20.0, "Lighting"),
        ]
    }

    fn controller(page_size: usize, products: Vec<Product>) -> ViewController {
        let paginator = Paginator::new(NonZeroUsize::new(page_size).unwrap());
        let mut controller = ViewController::new(paginator);
        controller.on_collection_loaded(products);
        controller
    }

    fn visible(controller: &ViewController) -> Vec<String> {
        controller.view().items.iter().map(|p| p.name.clone()).collect()
    }

    fn numbered(count: u32) -> Vec<Product> {
        (1..=count)
            .map(|i| Product::new(i, format!("Item {i}"), f64::from(i), "Misc"))
            .collect()
    }

    #[test]
    fn unfiltered_collection_pages_by_price() {
        let mut c = controller(2, furniture());
        assert_eq!(visible(&c), vec!["Lamp", "Table"]);
        assert_eq!(c.total_pages(), 2);

        c.on_page_changed(2);
        assert_eq!(visible(&c), vec!["Chair"]);
    }

    #[test]
    fn category_filter_narrows_to_furniture() {
        let mut c = controller(2, furniture());
        c.on_category_changed("Furniture");
        assert_eq!(visible(&c), vec!["Table", "Chair"]);
        assert_eq!(c.total_pages(), 1);
    }

    #[test]
    fn unfavoriting_under_favorites_only_hides_the_product() {
        let mut c = controller(2, furniture());
        c.on_favorites_toggle();
        assert_eq!(visible(&c), vec!["Table"]);
        assert_eq!(c.total_pages(), 1);

        c.on_favorite_toggled(ProductId(2));
        assert!(visible(&c).is_empty());
        assert_eq!(c.total_pages(), 0);
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut c = controller(2, furniture());
        c.on_search_changed("la");
        assert_eq!(visible(&c), vec!["Lamp"]);
    }

    #[test]
    fn control_changes_reset_to_first_page() {
        // All favorites, so the favorites-only filter keeps every page alive.
        let favorites = |count| -> Vec<Product> {
            numbered(count).into_iter().map(|p| p.favorite(true)).collect()
        };
        let mut c = controller(2, favorites(10));
        let changes: Vec<ViewEvent> = vec![
            ViewEvent::SearchChanged("Item".to_string()),
            ViewEvent::CategoryChanged("Misc".to_string()),
            ViewEvent::SortChanged(SortOrder::Descending),
            ViewEvent::FavoritesToggled,
            ViewEvent::FavoritesToggled,
            ViewEvent::CollectionLoaded(favorites(8)),
        ];

        for change in changes {
            c.on_page_changed(3);
            assert_eq!(c.current_page(), 3);
            c.dispatch(change.clone());
            assert_eq!(c.current_page(), 1, "after {change:?}");
        }
    }

    #[test]
    fn page_requests_are_clamped() {
        let mut c = controller(3, numbered(7));
        c.on_page_changed(0);
        assert_eq!(c.current_page(), 1);
        c.on_page_changed(42);
        assert_eq!(c.current_page(), 3);
        assert_eq!(visible(&c), vec!["Item 7"]);
    }

    #[test]
    fn deleting_only_item_on_last_page_clamps() {
        let mut c = controller(3, numbered(7));
        c.on_page_changed(3);

        c.on_product_deleted(ProductId(7));
        assert_eq!(c.total_pages(), 2);
        assert_eq!(c.current_page(), 2);
        assert_eq!(visible(&c), vec!["Item 4", "Item 5", "Item 6"]);
    }

    #[test]
    fn mutations_keep_the_current_page() {
        let mut c = controller(3, numbered(7));
        c.on_page_changed(2);

        c.on_favorite_toggled(ProductId(1));
        assert_eq!(c.current_page(), 2);
        c.on_product_deleted(ProductId(1));
        assert_eq!(c.current_page(), 2);
        assert_eq!(visible(&c), vec!["Item 5", "Item 6", "Item 7"]);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut c = controller(2, furniture());
        let revision = c.store().revision();

        c.on_favorite_toggled(ProductId(99));
        c.on_product_deleted(ProductId(99));
        assert_eq!(c.store().revision(), revision);
        assert_eq!(c.store().len(), 3);
    }

    #[test]
    fn repeated_delete_is_idempotent() {
        let mut c = controller(2, furniture());
        c.on_product_deleted(ProductId(3));
        let after_once = visible(&c);
        c.on_product_deleted(ProductId(3));
        assert_eq!(visible(&c), after_once);
        assert_eq!(c.store().len(), 2);
    }

    #[test]
    fn categories_ignore_active_filters() {
        let mut c = controller(2, furniture());
        c.on_category_changed("Lighting");
        c.on_favorites_toggle();
        assert_eq!(c.categories(), vec!["Furniture", "Lighting"]);
    }

    #[test]
    fn empty_collection_before_load() {
        let c = ViewController::default();
        let page = c.view();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn configured_default_sort_is_applied() {
        let config = CatalogConfig {
            default_sort: SortOrder::Descending,
            ..CatalogConfig::default()
        };
        let mut c = ViewController::from_config(&config);
        c.on_collection_loaded(furniture());
        assert_eq!(visible(&c), vec!["Chair", "Table", "Lamp"]);
    }
}
