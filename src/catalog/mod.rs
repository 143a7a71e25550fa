//! # Derived catalog view
//!
//! The collection flows through three pure stages before it reaches the screen:
//!
//! ```text
//! CollectionStore -> filter_products -> sort_by_price -> Paginator -> PageResult
//! ```
//!
//! [`derive_view`] runs the whole chain in one call. [`ViewController`] owns the
//! collection and the [`ViewState`] and re-derives after every transition.

pub mod controller;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod store;
pub mod view_state;

pub use controller::{ViewController, ViewEvent};
pub use filter::{filter_products, FilterCriteria};
pub use paginate::{PageSlice, Paginator, DEFAULT_PAGE_SIZE};
pub use sort::sort_by_price;
pub use store::CollectionStore;
pub use view_state::{ParseSortOrderError, SortOrder, ViewState};

use crate::model::Product;
use std::ops::RangeInclusive;

/// The page handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<'a> {
    pub items: Vec<&'a Product>,
    pub current_page: usize,
    /// Zero when nothing matched.
    pub total_pages: usize,
    /// Number of products that survived filtering, across all pages.
    pub total_matches: usize,
}

impl PageResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page buttons to render. Empty when nothing matched.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        if self.total_pages == 0 {
            1..=0
        } else {
            1..=self.total_pages
        }
    }
}

/// Filter, sort and paginate `products` under `state`.
///
/// Pure: the same collection and state always produce the same page.
pub fn derive_view<'a>(
    products: &'a [Product],
    state: &ViewState,
    paginator: Paginator,
) -> PageResult<'a> {
    let mut matches = filter_products(products, &FilterCriteria::from(state));
    sort_by_price(&mut matches, state.sort_order);
    let page = paginator.paginate(&matches, state.current_page);
    PageResult {
        items: page.items.to_vec(),
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_matches: matches.len(),
    }
}
