//! Catalog page: form, product grid, and the controller wiring between them.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It binds [`CatalogController`] to Leptos signals
//! through [`PageView`], loads the list once on hydration, and spawns one
//! local task per user action. Controls stay enabled while requests are in
//! flight.

use std::future::Future;

use leptos::prelude::*;

use crate::components::navbar::{LIST_SECTION_ID, Navbar};
use crate::components::product_card::ProductCard;
use crate::components::product_form::ProductForm;
use crate::components::toast::ToastView;
use crate::controller::{CatalogController, CatalogView};
use crate::net::api::HttpCatalogApi;
use crate::net::types::{Product, ProductId};
use crate::state::catalog::CatalogState;
use crate::state::form::FormState;
use crate::state::toast::{ToastKind, ToastState};

type PageController = CatalogController<HttpCatalogApi, PageView>;

/// Signal-backed [`CatalogView`].
#[derive(Clone, Copy)]
struct PageView {
    catalog: RwSignal<CatalogState>,
    form: RwSignal<FormState>,
    toast: RwSignal<ToastState>,
    form_ref: NodeRef<leptos::html::Form>,
}

impl CatalogView for PageView {
    fn render_products(&self, products: Vec<Product>) {
        self.catalog.update(|c| c.replace(products));
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.toast.update(|t| id = t.show(kind, message));
        #[cfg(feature = "hydrate")]
        {
            let toast = self.toast;
            set_timeout(move || toast.update(|t| t.dismiss(id)), crate::state::toast::TOAST_DURATION);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn read_form(&self) -> FormState {
        self.form.get_untracked()
    }

    fn write_form(&self, form: FormState) {
        self.form.set(form);
    }

    fn confirm(&self, message: &str) -> bool {
        crate::util::browser::confirm(message)
    }

    fn reveal_form(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = self.form_ref.get_untracked() {
                crate::util::browser::scroll_into_view(&el);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.form_ref;
        }
    }
}

/// Run a controller action as a local task in the browser. No-op during SSR.
fn dispatch<F, Fut>(page: PageView, action: F)
where
    F: FnOnce(PageController) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let controller = CatalogController::new(HttpCatalogApi::from_document(), page);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(action(controller));
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (controller, action);
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let form = expect_context::<RwSignal<FormState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let page = PageView { catalog, form, toast, form_ref };

    dispatch(page, |c| async move { c.refresh().await });

    let on_submit = Callback::new(move |()| dispatch(page, |c| async move { c.submit().await }));
    let on_cancel = Callback::new(move |()| dispatch(page, |c| async move { c.cancel_edit() }));
    let on_edit = Callback::new(move |id: ProductId| dispatch(page, move |c| async move { c.begin_edit(id).await }));
    let on_delete = Callback::new(move |id: ProductId| dispatch(page, move |c| async move { c.delete(id).await }));

    view! {
        <div class="catalog-page">
            <Navbar/>
            <main class="catalog-page__main">
                <ProductForm form_ref=form_ref on_submit=on_submit on_cancel=on_cancel/>
                <section class="catalog-page__list" id=LIST_SECTION_ID>
                    <h2 class="catalog-page__heading">"Products"</h2>
                    <div class="empty-state" class:hidden=move || !catalog.get().shows_empty_state()>
                        <i class="fas fa-box-open empty-state__icon" aria-hidden="true"></i>
                        <p class="empty-state__title">"No products yet"</p>
                        <p class="empty-state__hint">"Add your first product using the form."</p>
                    </div>
                    <div class="product-grid" class:hidden=move || !catalog.get().shows_list()>
                        {move || {
                            catalog
                                .get()
                                .products
                                .into_iter()
                                .map(|product| {
                                    view! { <ProductCard product=product on_edit=on_edit on_delete=on_delete/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </main>
            <ToastView/>
        </div>
    }
}
