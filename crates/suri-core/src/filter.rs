//! # Catalog Filter
//!
//! Applies the cart store's search term and selected category to a product
//! list. This is a read-only view: it never touches the cart state.
//!
//! ```text
//! CartState { search_term: "shirt", selected_category: "men's clothing" }
//!      │
//!      ▼
//! ProductFilter::from(&state)
//!      │
//!      ▼
//! apply(&products) ──► products whose category matches (case-insensitive)
//!                      AND whose title contains "shirt" (case-insensitive)
//! ```

use crate::cart::CartState;
use crate::types::{is_all_categories, Product};

/// Search/category predicate over catalog products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    /// Lower-cased search term; `None` when empty.
    term: Option<String>,
    /// Lower-cased category; `None` for the "All" sentinel.
    category: Option<String>,
}

impl ProductFilter {
    /// Builds a filter from a raw search term and category.
    ///
    /// ## Example
    /// ```rust
    /// use suri_core::ProductFilter;
    ///
    /// let filter = ProductFilter::new("", "All");
    /// assert!(filter.is_unfiltered());
    /// ```
    pub fn new(search_term: &str, category: &str) -> Self {
        let term = (!search_term.is_empty()).then(|| search_term.to_lowercase());
        let category = (!is_all_categories(category)).then(|| category.to_lowercase());
        ProductFilter { term, category }
    }

    /// True when every product passes.
    pub fn is_unfiltered(&self) -> bool {
        self.term.is_none() && self.category.is_none()
    }

    /// Checks a single product.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != *category {
                return false;
            }
        }
        match &self.term {
            Some(term) => product.title.to_lowercase().contains(term.as_str()),
            None => true,
        }
    }

    /// Returns the matching products, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

impl From<&CartState> for ProductFilter {
    fn from(state: &CartState) -> Self {
        ProductFilter::new(&state.search_term, &state.selected_category)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartAction;
    use crate::money::Money;
    use crate::types::ProductId;

    fn product(id: u32, title: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Money::from_cents(1000),
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Mens Casual Premium Slim Fit T-Shirts", "men's clothing"),
            product(2, "John Hardy Women's Legends Naga Bracelet", "jewelery"),
            product(3, "WD 2TB Elements Portable External Hard Drive", "electronics"),
            product(4, "Opna Women's Short Sleeve Moisture", "women's clothing"),
            product(5, "Mens Cotton Jacket", "men's clothing"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_default_state_is_unfiltered() {
        let filter = ProductFilter::from(&CartState::new());
        assert!(filter.is_unfiltered());
        assert_eq!(filter.apply(&catalog()).len(), 5);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let catalog = catalog();
        let filter = ProductFilter::new("", "Men's Clothing");
        assert_eq!(ids(&filter.apply(&catalog)), vec![1, 5]);

        let filter = ProductFilter::new("", "ALL");
        assert_eq!(filter.apply(&catalog).len(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = catalog();
        let filter = ProductFilter::new("WOMEN", "All");
        assert_eq!(ids(&filter.apply(&catalog)), vec![2, 4]);

        let filter = ProductFilter::new("shirt", "All");
        assert_eq!(ids(&filter.apply(&catalog)), vec![1]);
    }

    #[test]
    fn test_term_and_category_combine() {
        let state = CartState::new()
            .reduce(&CartAction::SetSearchTerm("mens".to_string()))
            .reduce(&CartAction::SetSelectedCategory("men's clothing".to_string()));

        let catalog = catalog();
        assert_eq!(ids(&ProductFilter::from(&state).apply(&catalog)), vec![1, 5]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let filter = ProductFilter::new("", "garden");
        assert!(filter.apply(&catalog()).is_empty());
    }
}
