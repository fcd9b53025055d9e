//! Card component for one product in the catalog grid.

use leptos::prelude::*;

use crate::net::types::{Product, ProductId};
use crate::util::format::{DESCRIPTION_PREVIEW_CHARS, format_price, truncate_description};

/// A product card with edit and delete actions.
#[component]
pub fn ProductCard(product: Product, on_edit: Callback<ProductId>, on_delete: Callback<ProductId>) -> impl IntoView {
    let id = product.id;
    let price = format_price(product.price);
    let description = truncate_description(&product.description, DESCRIPTION_PREVIEW_CHARS);
    let title = product.name.clone();

    view! {
        <article class="product-card">
            <div class="product-card__header">
                <h3 class="product-card__name" title=title>{product.name}</h3>
                <span class="product-card__price">{price}</span>
            </div>
            <p class="product-card__description">{description}</p>
            <div class="product-card__actions">
                <button class="btn btn--edit" on:click=move |_| on_edit.run(id)>
                    <i class="fas fa-edit" aria-hidden="true"></i>
                    " Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    <i class="fas fa-trash" aria-hidden="true"></i>
                    " Delete"
                </button>
            </div>
        </article>
    }
}
