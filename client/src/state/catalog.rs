//! Rendered product-list state.
//!
//! DESIGN
//! ======
//! Holds the last successfully loaded list only. A failed load never touches
//! this state, so a previous render survives network errors intact.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Product;

/// Product list backing the card grid, empty state, and navbar count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    /// True once any list load has completed.
    pub loaded: bool,
}

impl CatalogState {
    /// Replace the rendered list with a freshly loaded one.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loaded = true;
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// The placeholder shows only after a load returned nothing.
    pub fn shows_empty_state(&self) -> bool {
        self.loaded && self.products.is_empty()
    }

    pub fn shows_list(&self) -> bool {
        !self.shows_empty_state()
    }
}
