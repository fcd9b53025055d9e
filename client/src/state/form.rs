//! Product form state and its add/edit mode.
//!
//! DESIGN
//! ======
//! Fields hold the raw strings typed by the user; parsing into a
//! [`ProductDraft`] happens only on submit. The hidden `id` field alone decides
//! the mode: non-empty means edit, empty means add.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Product, ProductDraft, ProductId};

/// The two mutually exclusive states of the product form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => "Add New Product",
            Self::Edit => "Edit Product",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Add => "Save Product",
            Self::Edit => "Update Product",
        }
    }

    pub fn shows_cancel(self) -> bool {
        matches!(self, Self::Edit)
    }
}

/// Validation failures raised while reading the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Product name is required")]
    MissingName,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Stock must be a non-negative whole number")]
    InvalidStock,

    #[error("Product id {0:?} is not a valid number")]
    InvalidId(String),
}

/// Raw form field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// Hidden identifier field.
    pub id: String,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub description: String,
}

impl FormState {
    /// Populate every field from an existing product (edit mode).
    pub fn editing(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.id.trim().is_empty() { FormMode::Add } else { FormMode::Edit }
    }

    /// Clear every field, returning the form to add mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse the hidden identifier. `Ok(None)` in add mode.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidId`] if the field is set but not an integer.
    pub fn edit_id(&self) -> Result<Option<ProductId>, FormError> {
        let raw = self.id.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<ProductId>()
            .map(Some)
            .map_err(|_| FormError::InvalidId(raw.to_owned()))
    }

    /// Parse the visible fields into a draft. Only `name` is trimmed; free
    /// text is sent as typed.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] naming the first field that fails validation.
    pub fn to_draft(&self) -> Result<ProductDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(FormError::InvalidPrice)?;
        let stock = self
            .stock
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|s| *s >= 0)
            .ok_or(FormError::InvalidStock)?;
        Ok(ProductDraft {
            name: name.to_owned(),
            price,
            stock,
            category: self.category.clone(),
            description: self.description.clone(),
        })
    }
}
