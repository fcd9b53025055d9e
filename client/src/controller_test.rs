use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::types::ProductDraft;
use crate::state::catalog::CatalogState;
use crate::state::form::FormMode;

// =============================================================
// Fakes
// =============================================================

#[derive(Clone, Debug, PartialEq)]
enum Call {
    List,
    Get(ProductId),
    Create(Product),
    Replace(ProductId, ProductDraft),
    Delete(ProductId),
}

#[derive(Default)]
struct MemoryApi {
    products: RefCell<Vec<Product>>,
    calls: RefCell<Vec<Call>>,
    fail_all: Cell<bool>,
}

impl MemoryApi {
    fn with(products: Vec<Product>) -> Self {
        Self { products: RefCell::new(products), ..Self::default() }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail_all.get() { Err(ApiError::Network("connection refused".to_owned())) } else { Ok(()) }
    }

    fn ids(&self) -> Vec<ProductId> {
        self.products.borrow().iter().map(|p| p.id).collect()
    }

    fn writes(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Create(_) | Call::Replace(..) | Call::Delete(_)))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait(?Send)]
impl CatalogApi for MemoryApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.calls.borrow_mut().push(Call::List);
        self.check()?;
        Ok(self.products.borrow().clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.calls.borrow_mut().push(Call::Get(id));
        self.check()?;
        self.products
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404 })
    }

    async fn create_product(&self, product: &Product) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Create(product.clone()));
        self.check()?;
        self.products.borrow_mut().push(product.clone());
        Ok(())
    }

    async fn replace_product(&self, id: ProductId, draft: &ProductDraft) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Replace(id, draft.clone()));
        self.check()?;
        let mut products = self.products.borrow_mut();
        let slot = products.iter_mut().find(|p| p.id == id).ok_or(ApiError::Status { status: 404 })?;
        *slot = Product::from_draft(id, draft.clone());
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.check()?;
        self.products.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingView {
    catalog: RefCell<CatalogState>,
    toasts: RefCell<Vec<(ToastKind, String)>>,
    form: RefCell<FormState>,
    confirm_answer: Cell<bool>,
    confirm_prompts: RefCell<Vec<String>>,
    reveals: Cell<usize>,
}

impl RecordingView {
    fn last_toast(&self) -> Option<(ToastKind, String)> {
        self.toasts.borrow().last().cloned()
    }

    fn has_toast(&self, kind: ToastKind, message: &str) -> bool {
        self.toasts.borrow().iter().any(|(k, m)| *k == kind && m == message)
    }

    fn rendered_ids(&self) -> Vec<ProductId> {
        self.catalog.borrow().products.iter().map(|p| p.id).collect()
    }
}

impl CatalogView for RecordingView {
    fn render_products(&self, products: Vec<Product>) {
        self.catalog.borrow_mut().replace(products);
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.borrow_mut().push((kind, message.to_owned()));
    }

    fn read_form(&self) -> FormState {
        self.form.borrow().clone()
    }

    fn write_form(&self, form: FormState) {
        *self.form.borrow_mut() = form;
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirm_prompts.borrow_mut().push(message.to_owned());
        self.confirm_answer.get()
    }

    fn reveal_form(&self) {
        self.reveals.set(self.reveals.get() + 1);
    }
}

fn product(id: ProductId) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        price: 10.0,
        stock: 5,
        category: "misc".to_owned(),
        description: format!("Description {id}"),
    }
}

fn new_product_form() -> FormState {
    FormState {
        id: String::new(),
        name: "Lamp".to_owned(),
        price: "24.99".to_owned(),
        stock: "7".to_owned(),
        category: "home".to_owned(),
        description: "Desk lamp".to_owned(),
    }
}

fn assert_add_mode(view: &RecordingView) {
    let form = view.form.borrow();
    assert_eq!(*form, FormState::default());
    assert_eq!(form.mode(), FormMode::Add);
    assert!(!form.mode().shows_cancel());
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_empty_collection_shows_placeholder_without_success_toast() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::default(), &view);
    block_on(ctl.refresh());
    assert!(view.catalog.borrow().shows_empty_state());
    assert!(!view.catalog.borrow().shows_list());
    assert!(view.toasts.borrow().is_empty());
}

#[test]
fn refresh_non_empty_collection_renders_list_and_success_toast() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    block_on(ctl.refresh());
    assert!(view.catalog.borrow().shows_list());
    assert!(!view.catalog.borrow().shows_empty_state());
    assert_eq!(view.catalog.borrow().count(), 2);
    assert_eq!(view.last_toast(), Some((ToastKind::Success, MSG_LOADED.to_owned())));
}

#[test]
fn refresh_failure_reports_error_and_keeps_previous_render() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    block_on(ctl.refresh());
    ctl.api().fail_all.set(true);
    block_on(ctl.refresh());
    assert_eq!(view.rendered_ids(), vec![1, 2]);
    assert_eq!(view.last_toast(), Some((ToastKind::Error, MSG_LOAD_FAILED.to_owned())));
}

#[test]
fn refresh_failure_before_any_load_leaves_view_unloaded() {
    let view = RecordingView::default();
    let api = MemoryApi::default();
    api.fail_all.set(true);
    let ctl = CatalogController::new(api, &view);
    block_on(ctl.refresh());
    assert!(!view.catalog.borrow().loaded);
    assert!(!view.catalog.borrow().shows_empty_state());
}

// =============================================================
// submit: create
// =============================================================

#[test]
fn create_assigns_next_id_after_highest() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2), product(3)]), &view);
    view.write_form(new_product_form());
    block_on(ctl.submit());

    let created = ctl.api().writes();
    assert_eq!(created.len(), 1);
    let Call::Create(sent) = &created[0] else {
        panic!("expected create, got {created:?}");
    };
    assert_eq!(sent.id, 4);
    assert_eq!(sent.name, "Lamp");
    assert_eq!(sent.stock, 7);
    assert!(view.rendered_ids().contains(&4));
    assert!(view.has_toast(ToastKind::Success, MSG_CREATED));
}

#[test]
fn create_into_empty_collection_starts_at_one() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::default(), &view);
    view.write_form(new_product_form());
    block_on(ctl.submit());
    assert_eq!(ctl.api().ids(), vec![1]);
    assert_eq!(view.rendered_ids(), vec![1]);
}

#[test]
fn create_fetches_list_before_posting() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(5)]), &view);
    view.write_form(new_product_form());
    block_on(ctl.submit());
    let calls = ctl.api().calls.borrow().clone();
    assert_eq!(calls[0], Call::List);
    assert!(matches!(calls[1], Call::Create(ref p) if p.id == 6));
    assert_eq!(calls[2], Call::List);
}

#[test]
fn create_success_returns_form_to_add_mode() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1)]), &view);
    view.write_form(new_product_form());
    block_on(ctl.submit());
    assert_add_mode(&view);
}

// =============================================================
// submit: update
// =============================================================

#[test]
fn submit_with_hidden_id_replaces_instead_of_creating() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    view.write_form(FormState { id: "2".to_owned(), ..new_product_form() });
    block_on(ctl.submit());

    let writes = ctl.api().writes();
    assert_eq!(writes.len(), 1);
    assert!(matches!(&writes[0], Call::Replace(2, draft) if draft.name == "Lamp"));
    assert_eq!(ctl.api().ids(), vec![1, 2]);
    assert!(view.has_toast(ToastKind::Success, MSG_UPDATED));
    assert_add_mode(&view);
}

#[test]
fn update_reloads_list_with_new_values() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1)]), &view);
    view.write_form(FormState { id: "1".to_owned(), ..new_product_form() });
    block_on(ctl.submit());
    assert_eq!(view.catalog.borrow().products[0].name, "Lamp");
}

// =============================================================
// submit: failures
// =============================================================

#[test]
fn invalid_form_reports_validation_error_without_requests() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1)]), &view);
    let bad = FormState { price: "-3".to_owned(), ..new_product_form() };
    view.write_form(bad.clone());
    block_on(ctl.submit());
    assert!(ctl.api().calls.borrow().is_empty());
    assert_eq!(view.last_toast(), Some((ToastKind::Error, FormError::InvalidPrice.to_string())));
    assert_eq!(*view.form.borrow(), bad);
}

#[test]
fn save_network_failure_keeps_form_and_reports_error() {
    let view = RecordingView::default();
    let api = MemoryApi::with(vec![product(1)]);
    api.fail_all.set(true);
    let ctl = CatalogController::new(api, &view);
    let form = FormState { id: "1".to_owned(), ..new_product_form() };
    view.write_form(form.clone());
    block_on(ctl.submit());
    assert_eq!(*view.form.borrow(), form);
    assert_eq!(view.last_toast(), Some((ToastKind::Error, MSG_SAVE_FAILED.to_owned())));
}

#[test]
fn save_reports_which_write_happened() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(3)]), &view);
    assert_eq!(block_on(ctl.save(&new_product_form())), Ok(Saved::Created(4)));
    let edit = FormState { id: "3".to_owned(), ..new_product_form() };
    assert_eq!(block_on(ctl.save(&edit)), Ok(Saved::Updated(3)));
}

#[test]
fn save_rejects_malformed_hidden_id() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::default(), &view);
    let form = FormState { id: "abc".to_owned(), ..new_product_form() };
    assert_eq!(
        block_on(ctl.save(&form)),
        Err(ActionError::Form(FormError::InvalidId("abc".to_owned())))
    );
}

// =============================================================
// begin_edit / cancel_edit
// =============================================================

#[test]
fn begin_edit_populates_form_and_reveals_it() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    block_on(ctl.begin_edit(2));
    let form = view.form.borrow().clone();
    assert_eq!(form.id, "2");
    assert_eq!(form.name, "Product 2");
    assert_eq!(form.description, "Description 2");
    assert_eq!(form.mode(), FormMode::Edit);
    assert_eq!(form.mode().submit_label(), "Update Product");
    assert_eq!(view.reveals.get(), 1);
}

#[test]
fn begin_edit_failure_leaves_form_unchanged() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1)]), &view);
    view.write_form(new_product_form());
    block_on(ctl.begin_edit(99));
    assert_eq!(*view.form.borrow(), new_product_form());
    assert_eq!(view.reveals.get(), 0);
    assert_eq!(view.last_toast(), Some((ToastKind::Error, MSG_EDIT_FAILED.to_owned())));
}

#[test]
fn cancel_edit_restores_add_mode() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1)]), &view);
    block_on(ctl.begin_edit(1));
    ctl.cancel_edit();
    assert_add_mode(&view);
}

// =============================================================
// delete
// =============================================================

#[test]
fn declined_delete_changes_nothing() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    block_on(ctl.refresh());
    view.toasts.borrow_mut().clear();
    view.confirm_answer.set(false);

    block_on(ctl.delete(1));

    assert_eq!(view.confirm_prompts.borrow().as_slice(), [CONFIRM_DELETE.to_owned()]);
    assert_eq!(ctl.api().ids(), vec![1, 2]);
    assert_eq!(view.rendered_ids(), vec![1, 2]);
    assert!(ctl.api().writes().is_empty());
    assert!(view.toasts.borrow().is_empty());
}

#[test]
fn confirmed_delete_removes_and_reloads() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    view.confirm_answer.set(true);
    block_on(ctl.delete(1));
    assert_eq!(ctl.api().ids(), vec![2]);
    assert_eq!(view.rendered_ids(), vec![2]);
    assert!(view.has_toast(ToastKind::Success, MSG_DELETED));
}

#[test]
fn confirmed_delete_returns_form_to_add_mode() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    block_on(ctl.begin_edit(2));
    assert_eq!(view.form.borrow().mode(), FormMode::Edit);

    view.confirm_answer.set(true);
    block_on(ctl.delete(2));

    assert_add_mode(&view);
    assert_eq!(ctl.api().ids(), vec![1]);
}

#[test]
fn declined_delete_keeps_edit_in_progress() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1), product(2)]), &view);
    block_on(ctl.begin_edit(2));
    view.confirm_answer.set(false);

    block_on(ctl.delete(2));

    assert_eq!(view.form.borrow().id, "2");
    assert_eq!(view.form.borrow().mode(), FormMode::Edit);
}

#[test]
fn deleting_last_product_shows_empty_state() {
    let view = RecordingView::default();
    let ctl = CatalogController::new(MemoryApi::with(vec![product(1)]), &view);
    view.confirm_answer.set(true);
    block_on(ctl.delete(1));
    assert!(view.catalog.borrow().shows_empty_state());
    assert_eq!(view.last_toast(), Some((ToastKind::Success, MSG_DELETED.to_owned())));
}

#[test]
fn delete_failure_reports_error() {
    let view = RecordingView::default();
    let api = MemoryApi::with(vec![product(1)]);
    api.fail_all.set(true);
    let ctl = CatalogController::new(api, &view);
    view.confirm_answer.set(true);
    block_on(ctl.delete(1));
    assert_eq!(view.last_toast(), Some((ToastKind::Error, MSG_DELETE_FAILED.to_owned())));
}
