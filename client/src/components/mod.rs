//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog chrome and interaction surfaces while reading
//! shared state from Leptos context providers. Network work is delegated back
//! to the page through callbacks.

pub mod navbar;
pub mod product_card;
pub mod product_form;
pub mod toast;
