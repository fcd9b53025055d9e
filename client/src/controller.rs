//! Catalog UI controller: the user-action → request → reload → render flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is generic over two seams. [`CatalogApi`] is the REST
//! collaborator and [`CatalogView`] is everything the page exposes (list
//! rendering, toasts, form fields, confirmation, scrolling). The browser binds
//! them to `gloo-net` and Leptos signals; tests bind them to in-memory fakes.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught here, logged, and surfaced as an error toast. No
//! operation retries, and none mutates view state before its request
//! succeeds, so nothing needs rolling back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::{ApiError, CatalogApi};
use crate::net::types::{Product, ProductId, next_product_id};
use crate::state::form::{FormError, FormState};
use crate::state::toast::ToastKind;

pub const MSG_LOADED: &str = "Products loaded successfully";
pub const MSG_LOAD_FAILED: &str = "Failed to fetch products";
pub const MSG_CREATED: &str = "Product created successfully!";
pub const MSG_UPDATED: &str = "Product updated successfully!";
pub const MSG_SAVE_FAILED: &str = "Failed to save product";
pub const MSG_EDIT_FAILED: &str = "Failed to load product for editing";
pub const MSG_DELETED: &str = "Product deleted successfully!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete product";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product? This action cannot be undone.";

/// Page surface driven by the controller.
pub trait CatalogView {
    /// Replace the rendered list (cards, empty state, count).
    fn render_products(&self, products: Vec<Product>);
    fn notify(&self, kind: ToastKind, message: &str);
    fn read_form(&self) -> FormState;
    fn write_form(&self, form: FormState);
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
    /// Bring the form into view after entering edit mode.
    fn reveal_form(&self);
}

impl<V: CatalogView + ?Sized> CatalogView for &V {
    fn render_products(&self, products: Vec<Product>) {
        (**self).render_products(products);
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        (**self).notify(kind, message);
    }

    fn read_form(&self) -> FormState {
        (**self).read_form()
    }

    fn write_form(&self, form: FormState) {
        (**self).write_form(form);
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn reveal_form(&self) {
        (**self).reveal_form();
    }
}

/// Failures on the submit path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Which write a submit performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saved {
    Created(ProductId),
    Updated(ProductId),
}

pub struct CatalogController<A, V> {
    api: A,
    view: V,
}

impl<A: CatalogApi, V: CatalogView> CatalogController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the full list and re-render it.
    pub async fn refresh(&self) {
        match self.api.list_products().await {
            Ok(products) => {
                let empty = products.is_empty();
                self.view.render_products(products);
                if !empty {
                    self.view.notify(ToastKind::Success, MSG_LOADED);
                }
            }
            Err(e) => {
                leptos::logging::warn!("failed to fetch products: {e}");
                self.view.notify(ToastKind::Error, MSG_LOAD_FAILED);
            }
        }
    }

    /// Handle a form submit: update when the hidden id is set, create otherwise.
    pub async fn submit(&self) {
        let form = self.view.read_form();
        match self.save(&form).await {
            Ok(saved) => {
                let message = match saved {
                    Saved::Created(_) => MSG_CREATED,
                    Saved::Updated(_) => MSG_UPDATED,
                };
                self.view.notify(ToastKind::Success, message);
                self.cancel_edit();
                self.refresh().await;
            }
            Err(ActionError::Form(e)) => {
                self.view.notify(ToastKind::Error, &e.to_string());
            }
            Err(ActionError::Api(e)) => {
                leptos::logging::warn!("failed to save product: {e}");
                self.view.notify(ToastKind::Error, MSG_SAVE_FAILED);
            }
        }
    }

    /// Perform the write for `form` without touching the view.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Form`] for invalid input (no request is sent) or
    /// [`ActionError::Api`] if any request fails.
    pub async fn save(&self, form: &FormState) -> Result<Saved, ActionError> {
        let edit_id = form.edit_id()?;
        let draft = form.to_draft()?;
        if let Some(id) = edit_id {
            self.api.replace_product(id, &draft).await?;
            return Ok(Saved::Updated(id));
        }
        // Client-assigned id: racy across concurrent creators.
        let existing = self.api.list_products().await?;
        let id = next_product_id(&existing);
        self.api.create_product(&Product::from_draft(id, draft)).await?;
        Ok(Saved::Created(id))
    }

    /// Load a product into the form and switch to edit mode.
    pub async fn begin_edit(&self, id: ProductId) {
        match self.api.get_product(id).await {
            Ok(product) => {
                self.view.write_form(FormState::editing(&product));
                self.view.reveal_form();
            }
            Err(e) => {
                leptos::logging::warn!("failed to load product {id}: {e}");
                self.view.notify(ToastKind::Error, MSG_EDIT_FAILED);
            }
        }
    }

    /// Delete after confirmation; declining is a silent no-op.
    pub async fn delete(&self, id: ProductId) {
        if !self.view.confirm(CONFIRM_DELETE) {
            return;
        }
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.view.notify(ToastKind::Success, MSG_DELETED);
                self.cancel_edit();
                self.refresh().await;
            }
            Err(e) => {
                leptos::logging::warn!("failed to delete product {id}: {e}");
                self.view.notify(ToastKind::Error, MSG_DELETE_FAILED);
            }
        }
    }

    /// Clear the form back to add mode.
    pub fn cancel_edit(&self) {
        self.view.write_form(FormState::default());
    }
}
