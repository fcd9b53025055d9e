//! Networking modules for the catalog REST collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the product wire schema.

pub mod api;
pub mod types;
