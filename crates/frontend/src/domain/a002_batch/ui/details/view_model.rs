//! ViewModel for the batch form

use crate::domain::a002_batch::api;
use crate::layout::modal_service::ModalService;
use crate::layout::notifications::NotificationService;
use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a002_batch::aggregate::{BatchDto, BatchId};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct BatchDetailsVm {
    pub product_id: StoredValue<ProductId>,
    pub batch_id: StoredValue<Option<BatchId>>,

    pub number: RwSignal<String>,
    pub manufacturing_date: RwSignal<String>,
    pub expiry_date: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl BatchDetailsVm {
    pub fn new(product_id: ProductId, batch_id: Option<BatchId>) -> Self {
        Self {
            product_id: StoredValue::new(product_id),
            batch_id: StoredValue::new(batch_id),
            number: RwSignal::new(String::new()),
            manufacturing_date: RwSignal::new(String::new()),
            expiry_date: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.batch_id.with_value(Option::is_some)
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let loading = self.loading;
        let saving = self.saving;
        Signal::derive(move || loading.get() || saving.get())
    }

    pub fn build_dto(&self) -> BatchDto {
        BatchDto {
            product_id: self.product_id.get_value(),
            number: self.number.get_untracked(),
            manufacturing_date: self.manufacturing_date.get_untracked(),
            expiry_date: self.expiry_date.get_untracked(),
        }
    }

    /// Reload the batch being edited so the form starts from server data
    pub fn load(&self) {
        let Some(batch_id) = self.batch_id.get_value() else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_batch(&batch_id).await {
                Ok(batch) => {
                    let dto = BatchDto::from_batch(vm.product_id.get_value(), &batch);
                    vm.number.set(dto.number);
                    vm.manufacturing_date.set(dto.manufacturing_date);
                    vm.expiry_date.set(dto.expiry_date);
                }
                Err(e) => vm.error.set(Some(format!("Could not load batch: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// Current form as a DTO; a validation failure goes to `report` and the
    /// inline error
    fn checked_dto(&self, report: impl FnOnce(String)) -> Option<BatchDto> {
        let dto = self.build_dto();
        match dto.validate() {
            Ok(_) => {
                self.error.set(None);
                Some(dto)
            }
            Err(e) => {
                let message = e.to_string();
                self.error.set(Some(message.clone()));
                report(message);
                None
            }
        }
    }

    pub fn save(&self, modal: ModalService, notifications: NotificationService, on_saved: Callback<()>) {
        let Some(dto) = self.checked_dto(|message| notifications.error(message)) else {
            return;
        };

        let vm = *self;
        vm.saving.set(true);
        modal.set_busy(true);
        spawn_local(async move {
            let result = match vm.batch_id.get_value() {
                Some(id) => api::update_batch(&id, &dto).await,
                None => api::create_batch(&dto).await,
            };
            vm.saving.set(false);
            modal.set_busy(false);
            match result {
                Ok(()) => {
                    notifications.success(if vm.is_edit_mode() {
                        format!("Batch {} updated", dto.number.trim())
                    } else {
                        format!("Batch {} added", dto.number.trim())
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    notifications.error(e.to_string());
                    vm.error.set(Some(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn filled_vm() -> BatchDetailsVm {
        let vm = BatchDetailsVm::new(ProductId::new("urea-gold"), None);
        vm.number.set("UG-002".into());
        vm.manufacturing_date.set("2024-03-01".into());
        vm.expiry_date.set("2025-03-01".into());
        vm
    }

    #[test]
    fn test_invalid_dates_are_reported_and_shown_inline() {
        let owner = Owner::new();
        owner.set();
        let vm = filled_vm();
        vm.expiry_date.set("2024-02-01".into());

        let reported = RefCell::new(Vec::new());
        assert!(vm.checked_dto(|m| reported.borrow_mut().push(m)).is_none());
        assert_eq!(
            reported.into_inner(),
            vec!["Expiry date must be after manufacturing date".to_string()]
        );
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("Expiry date must be after manufacturing date")
        );
    }

    #[test]
    fn test_valid_form_clears_error_without_report() {
        let owner = Owner::new();
        owner.set();
        let vm = filled_vm();
        vm.error.set(Some("old".into()));

        let reported = RefCell::new(Vec::new());
        let dto = vm.checked_dto(|m| reported.borrow_mut().push(m));
        assert_eq!(dto.map(|d| d.number), Some("UG-002".to_string()));
        assert!(reported.into_inner().is_empty());
        assert_eq!(vm.error.get_untracked(), None);
    }
}
