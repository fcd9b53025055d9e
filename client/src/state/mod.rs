//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `form`, `toast`, `ui`) so individual
//! components can depend on small focused models.

pub mod catalog;
pub mod form;
pub mod toast;
pub mod ui;
