//! Stable price ordering.

use super::view_state::SortOrder;
use crate::model::Product;
use std::cmp::Ordering;

/// Stable-sort by price. Equal prices keep their incoming relative order in both
/// directions, which keeps pagination deterministic across re-renders.
pub fn sort_by_price(products: &mut [&Product], order: SortOrder) {
    match order {
        SortOrder::Ascending => products.sort_by(|a, b| compare_price(a, b)),
        SortOrder::Descending => products.sort_by(|a, b| compare_price(b, a)),
    }
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    price_key(a).total_cmp(&price_key(b))
}

// -0.0 and 0.0 must tie.
fn price_key(product: &Product) -> f64 {
    if product.price == 0.0 {
        0.0
    } else {
        product.price
    }
}
