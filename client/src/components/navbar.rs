//! Top navigation bar with product count and mobile menu.
//!
//! DESIGN
//! ======
//! In-page links scroll smoothly instead of jumping, and the same links are
//! repeated in the collapsible mobile menu.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;
use crate::util::browser::{anchor_target, scroll_to_id};

pub const FORM_SECTION_ID: &str = "product-form";
pub const LIST_SECTION_ID: &str = "products";

#[component]
pub fn Navbar() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <span class="navbar__brand">
                    <i class="fas fa-store" aria-hidden="true"></i>
                    " Product Catalog"
                </span>
                <div class="navbar__links">
                    <NavLink href="#product-form" label="Add Product"/>
                    <NavLink href="#products" label="Products"/>
                    <span class="navbar__count" title="Total products">
                        {move || catalog.get().count().to_string()}
                    </span>
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    <i class=move || ui.get().mobile_toggle_icon() aria-hidden="true"></i>
                </button>
            </div>
            <div class="navbar__mobile" class:hidden=move || !ui.get().mobile_menu_open>
                <NavLink href="#product-form" label="Add Product"/>
                <NavLink href="#products" label="Products"/>
            </div>
        </nav>
    }
}

/// Anchor that smooth-scrolls to its in-page target.
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            class="navbar__link"
            href=href
            on:click=move |ev: leptos::ev::MouseEvent| {
                if let Some(id) = anchor_target(href) {
                    ev.prevent_default();
                    scroll_to_id(id);
                }
            }
        >
            {label}
        </a>
    }
}
