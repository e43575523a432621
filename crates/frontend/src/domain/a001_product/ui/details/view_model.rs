//! ViewModel of the product wizard.
//!
//! All form data lives in one [`ProductFormState`] signal; staged files live
//! in local (non-`Send`) signals because they hold browser `File` handles.

use super::form_state::{ListField, ProductFormState};
use crate::domain::a001_product::api::{self, ProductUploads};
use crate::domain::a002_batch::api as batch_api;
use crate::layout::modal_service::ModalService;
use crate::layout::notifications::NotificationService;
use crate::shared::components::file_picker::{clear_staged, staged_files, StagedFiles};
use crate::shared::http::ApiError;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::shared::documents::DocumentCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Result of creating a product together with its first batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// Product stored, first batch rejected
    ProductOnly(ApiError),
    /// Product rejected; no batch was sent
    Failed(ApiError),
}

/// Create the product, then its first batch once the product was accepted
pub async fn create_with_first_batch<P, PF, B, BF>(
    create_product: P,
    create_batch: B,
) -> CreateOutcome
where
    P: FnOnce() -> PF,
    PF: Future<Output = Result<(), ApiError>>,
    B: FnOnce() -> BF,
    BF: Future<Output = Result<(), ApiError>>,
{
    if let Err(e) = create_product().await {
        return CreateOutcome::Failed(e);
    }
    match create_batch().await {
        Ok(()) => CreateOutcome::Created,
        Err(e) => CreateOutcome::ProductOnly(e),
    }
}

#[derive(Clone, Copy)]
pub struct ProductWizardVm {
    pub state: RwSignal<ProductFormState>,

    pub image: StagedFiles,
    pub nps_files: StagedFiles,
    pub msds_files: StagedFiles,
    pub certification_files: StagedFiles,

    /// Stored product being edited
    pub existing: RwSignal<Option<Product>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProductWizardVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ProductFormState::new_create()),
            image: staged_files(),
            nps_files: staged_files(),
            msds_files: staged_files(),
            certification_files: staged_files(),
            existing: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn documents(&self, category: DocumentCategory) -> StagedFiles {
        match category {
            DocumentCategory::NpsApproval => self.nps_files,
            DocumentCategory::Msds => self.msds_files,
            DocumentCategory::QualityCertifications => self.certification_files,
        }
    }

    // === Derived signals ===
    // Memos: keystrokes change `state` but must not re-render whole steps

    pub fn step(&self) -> Signal<u8> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.step)).into()
    }

    pub fn is_create(&self) -> Signal<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_create())).into()
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.submitting)).into()
    }

    /// Inputs are locked while loading or submitting
    pub fn is_locked(&self) -> Signal<bool> {
        let state = self.state;
        let loading = self.loading;
        Memo::new(move |_| loading.get() || state.with(|s| s.submitting)).into()
    }

    // === Commands ===

    /// Switch to update mode with the stored product
    pub fn load(&self, id: ProductId) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_product(&id).await {
                Ok(product) => {
                    vm.state.set(ProductFormState::from_product(&product));
                    vm.existing.set(Some(product));
                }
                Err(e) => vm.error.set(Some(format!("Could not load product: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    pub fn set_name(&self, name: String) {
        self.state.update(|s| s.set_name(name));
    }

    pub fn set_product_id(&self, value: String) {
        self.state.update(|s| s.set_product_id(value));
    }

    pub fn reset_product_id(&self) {
        self.state.update(ProductFormState::reset_product_id);
    }

    pub fn add_entry(&self, field: ListField) {
        self.state.update(|s| s.list_mut(field).push_empty());
    }

    pub fn remove_entry(&self, field: ListField, index: usize) {
        self.state.update(|s| {
            s.list_mut(field).remove(index);
        });
    }

    pub fn set_entry(&self, field: ListField, index: usize, value: String) {
        self.state.update(|s| s.list_mut(field).set(index, value));
    }

    pub fn next(&self, notifications: NotificationService) {
        let mut result = Ok(false);
        self.state.update(|s| result = s.next());
        match result {
            Ok(_) => self.error.set(None),
            Err(e) => {
                notifications.error(e.to_string());
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn prev(&self) {
        self.state.update(|s| {
            s.prev();
        });
        self.error.set(None);
    }

    fn uploads(&self) -> ProductUploads {
        let image = self
            .image
            .with_untracked(|files| files.first().map(|f| f.file.clone()));
        let documents = DocumentCategory::ALL
            .into_iter()
            .flat_map(|category| {
                self.documents(category).with_untracked(|files| {
                    files
                        .iter()
                        .map(|f| (category, f.file.clone()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        ProductUploads { image, documents }
    }

    fn set_submitting(&self, modal: ModalService, submitting: bool) {
        self.state.update(|s| s.submitting = submitting);
        modal.set_busy(submitting);
    }

    /// Validate everything and send it.
    ///
    /// Create sends the product first and its first batch only after the
    /// product was accepted. A failed batch leaves the product in place.
    pub fn submit(
        &self,
        modal: ModalService,
        notifications: NotificationService,
        on_saved: Callback<()>,
    ) {
        let state = self.state.get_untracked();
        if state.submitting {
            return;
        }
        if let Err(e) = state.validate_for_submit() {
            notifications.error(e.to_string());
            self.error.set(Some(e.to_string()));
            return;
        }
        self.error.set(None);

        let vm = *self;
        let dto = state.to_product_dto();
        let uploads = vm.uploads();
        vm.set_submitting(modal, true);

        spawn_local(async move {
            let saved = if state.is_create() {
                let batch = state.first_batch_dto();
                let outcome = create_with_first_batch(
                    || api::create_product(&dto, &uploads),
                    || batch_api::create_batch(&batch),
                )
                .await;
                match outcome {
                    CreateOutcome::Created => {
                        notifications.success(format!(
                            "Product {} created with batch {}",
                            dto.name, batch.number
                        ));
                        true
                    }
                    CreateOutcome::ProductOnly(e) => {
                        notifications.warning(format!(
                            "Product {} was created, but batch {} was not: {}. Use Add stock to add it.",
                            dto.name, batch.number, e
                        ));
                        true
                    }
                    CreateOutcome::Failed(e) => {
                        notifications.error(format!("Could not create product: {}", e));
                        vm.error.set(Some(e.to_string()));
                        false
                    }
                }
            } else {
                match api::update_product(&dto.product_id, &dto, &uploads).await {
                    Ok(()) => {
                        notifications.success(format!("Product {} updated", dto.name));
                        true
                    }
                    Err(e) => {
                        notifications.error(format!("Could not update product: {}", e));
                        vm.error.set(Some(e.to_string()));
                        false
                    }
                }
            };

            vm.set_submitting(modal, false);
            if saved {
                on_saved.run(());
            }
        });
    }

    /// Release image previews of every staged file
    pub fn release_files(&self) {
        clear_staged(self.image);
        for category in DocumentCategory::ALL {
            clear_staged(self.documents(category));
        }
    }
}

impl Default for ProductWizardVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::Cell;

    #[test]
    fn test_batch_not_sent_when_product_fails() {
        let batch_calls = Cell::new(0);
        let outcome = block_on(create_with_first_batch(
            || ready(Err(ApiError::Rejected("Product id already exists".into()))),
            || {
                batch_calls.set(batch_calls.get() + 1);
                ready(Ok(()))
            },
        ));
        assert_eq!(
            outcome,
            CreateOutcome::Failed(ApiError::Rejected("Product id already exists".into()))
        );
        assert_eq!(batch_calls.get(), 0);
    }

    #[test]
    fn test_failed_batch_keeps_product_created() {
        let order = Cell::new(0);
        let outcome = block_on(create_with_first_batch(
            || {
                assert_eq!(order.get(), 0);
                order.set(1);
                ready(Ok(()))
            },
            || {
                assert_eq!(order.get(), 1);
                order.set(2);
                ready(Err(ApiError::Server("Server error, please try again later".into())))
            },
        ));
        assert_eq!(
            outcome,
            CreateOutcome::ProductOnly(ApiError::Server(
                "Server error, please try again later".into()
            ))
        );
        assert_eq!(order.get(), 2);
    }

    #[test]
    fn test_both_calls_succeed() {
        let batch_calls = Cell::new(0);
        let outcome = block_on(create_with_first_batch(
            || ready(Ok(())),
            || {
                batch_calls.set(batch_calls.get() + 1);
                ready(Ok(()))
            },
        ));
        assert_eq!(outcome, CreateOutcome::Created);
        assert_eq!(batch_calls.get(), 1);
    }
}
