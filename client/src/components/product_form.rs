//! Add/edit product form.
//!
//! DESIGN
//! ======
//! Inputs write straight into the shared `FormState` signal; the title, submit
//! label, and cancel button are derived from its mode.

use leptos::prelude::*;

use crate::components::navbar::FORM_SECTION_ID;
use crate::state::form::FormState;

#[component]
pub fn ProductForm(
    form_ref: NodeRef<leptos::html::Form>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let mode = Memo::new(move |_| form.get().mode());

    view! {
        <section class="product-form" id=FORM_SECTION_ID>
            <h2 class="product-form__title">{move || mode.get().title()}</h2>
            <form
                class="product-form__form"
                node_ref=form_ref
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <input type="hidden" prop:value=move || form.get().id/>
                <label class="product-form__label">
                    "Name"
                    <input
                        class="product-form__input"
                        type="text"
                        required=true
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <div class="product-form__row">
                    <label class="product-form__label">
                        "Price"
                        <input
                            class="product-form__input"
                            type="number"
                            step="0.01"
                            min="0"
                            required=true
                            prop:value=move || form.get().price
                            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                        />
                    </label>
                    <label class="product-form__label">
                        "Stock"
                        <input
                            class="product-form__input"
                            type="number"
                            step="1"
                            min="0"
                            required=true
                            prop:value=move || form.get().stock
                            on:input=move |ev| form.update(|f| f.stock = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="product-form__label">
                    "Category"
                    <input
                        class="product-form__input"
                        type="text"
                        prop:value=move || form.get().category
                        on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    />
                </label>
                <label class="product-form__label">
                    "Description"
                    <textarea
                        class="product-form__input product-form__textarea"
                        rows="3"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="product-form__actions">
                    <button class="btn btn--primary" type="submit">
                        <i class="fas fa-save" aria-hidden="true"></i>
                        " "
                        <span>{move || mode.get().submit_label()}</span>
                    </button>
                    <button
                        class="btn"
                        type="button"
                        class:hidden=move || !mode.get().shows_cancel()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel Edit"
                    </button>
                </div>
            </form>
        </section>
    }
}
