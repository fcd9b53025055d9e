//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of catalog data so navigation
//! controls can evolve independently of the product list.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Font Awesome icon class for the mobile toggle button.
    pub fn mobile_toggle_icon(&self) -> &'static str {
        if self.mobile_menu_open { "fas fa-times" } else { "fas fa-bars" }
    }
}
