//! Narrowing the collection by search text, category and favorite flag.

use super::view_state::ViewState;
use crate::model::Product;

/// The filter-relevant slice of [`ViewState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCriteria<'a> {
    pub search_term: &'a str,
    pub category: &'a str,
    pub favorites_only: bool,
}

impl<'a> From<&'a ViewState> for FilterCriteria<'a> {
    fn from(state: &'a ViewState) -> Self {
        Self {
            search_term: &state.search_term,
            category: &state.category_filter,
            favorites_only: state.show_favorites_only,
        }
    }
}

/// Keep the products that pass every active constraint, in collection order.
///
/// Stages run as search, then category, then favorites. Each is a plain predicate,
/// so the surviving set does not depend on that order.
pub fn filter_products<'p>(products: &'p [Product], criteria: &FilterCriteria<'_>) -> Vec<&'p Product> {
    let needle = criteria.search_term.to_lowercase();
    products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| matches_category(p, criteria.category))
        .filter(|p| matches_favorite(p, criteria.favorites_only))
        .collect()
}

/// Case-insensitive substring match on the name. `needle` is already lowercase.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty() || product.name.to_lowercase().contains(needle)
}

/// Exact, case-sensitive category match.
fn matches_category(product: &Product, category: &str) -> bool {
    category.is_empty() || product.category == category
}

fn matches_favorite(product: &Product, favorites_only: bool) -> bool {
    !favorites_only || product.is_favorite
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Chair", 50.0, "Furniture"),
            Product::new(2, "Table", 30.0, "Furniture").favorite(true),
            Product::new(3, "Lamp", 20.0, "Lighting"),
            Product::new(4, "Floor LAMP", 70.0, "Lighting").favorite(true),
            Product::new(5, "Lampshade", 15.0, "lighting"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn no_constraints_keep_everything_in_order() {
        let products = catalog();
        let kept = filter_products(&products, &FilterCriteria::default());
        assert_eq!(ids(&kept), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = catalog();
        let criteria = FilterCriteria {
            search_term: "lAmP",
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &criteria)), vec![3, 4, 5]);

        let criteria = FilterCriteria {
            search_term: "la",
            ..Default::default()
        };
        let names: Vec<&str> = filter_products(&products, &criteria)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lamp", "Floor LAMP", "Lampshade"]);
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: "Lighting",
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &criteria)), vec![3, 4]);

        let criteria = FilterCriteria {
            category: "Light",
            ..Default::default()
        };
        assert!(filter_products(&products, &criteria).is_empty());
    }

    #[test]
    fn favorites_only_keeps_flagged_products() {
        let products = catalog();
        let criteria = FilterCriteria {
            favorites_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &criteria)), vec![2, 4]);
    }

    #[test]
    fn constraints_intersect() {
        let products = catalog();
        let criteria = FilterCriteria {
            search_term: "lamp",
            category: "Lighting",
            favorites_only: true,
        };
        assert_eq!(ids(&filter_products(&products, &criteria)), vec![4]);
    }

    #[test]
    fn stage_order_does_not_change_the_result_set() {
        let products = catalog();
        let needle = "la".to_string();
        let category = "Lighting";

        let stages: [&dyn Fn(&Product) -> bool; 3] = [
            &|p| matches_search(p, &needle),
            &|p| matches_category(p, category),
            &|p| matches_favorite(p, true),
        ];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        let expected = ids(&filter_products(
            &products,
            &FilterCriteria {
                search_term: "la",
                category,
                favorites_only: true,
            },
        ));
        for order in orders {
            let mut kept: Vec<&Product> = products.iter().collect();
            for stage in order {
                kept.retain(|p| stages[stage](p));
            }
            assert_eq!(ids(&kept), expected, "stage order {:?}", order);
        }
    }

    #[test]
    fn criteria_borrow_from_view_state() {
        let state = ViewState {
            search_term: "tab".to_string(),
            category_filter: "Furniture".to_string(),
            ..ViewState::default()
        };
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, &FilterCriteria::from(&state))), vec![2]);
    }
}
