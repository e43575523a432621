use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a002_batch::aggregate::BatchId;
use leptos::prelude::*;

/// What a confirmation dialog is about to delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Product { id: ProductId, name: String },
    Batch { id: BatchId, number: String },
}

impl DeleteTarget {
    pub fn prompt(&self) -> String {
        match self {
            DeleteTarget::Product { name, .. } => format!(
                "Delete product \"{}\" and all of its batches? This cannot be undone.",
                name
            ),
            DeleteTarget::Batch { number, .. } => {
                format!("Delete batch \"{}\"? This cannot be undone.", number)
            }
        }
    }
}

/// Modal currently open on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    /// Product wizard; `None` creates a new product
    ProductWizard { product_id: Option<ProductId> },
    /// Batch form; `None` adds stock to the product
    BatchForm {
        product_id: ProductId,
        product_name: String,
        batch_id: Option<BatchId>,
    },
    ConfirmDelete(DeleteTarget),
}

/// Open modal plus the busy flag of its running submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub current: Option<ModalKind>,
    pub busy: bool,
}

impl ModalState {
    /// Opening is refused while a submission runs
    pub fn open(&mut self, kind: ModalKind) -> bool {
        if self.busy {
            return false;
        }
        self.current = Some(kind);
        true
    }

    /// Closing is refused while a submission runs
    pub fn close(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.current = None;
        true
    }

    /// Close after a finished submission, clearing the busy flag
    pub fn finish(&mut self) {
        self.busy = false;
        self.current = None;
    }
}

/// Owner of the dashboard's modal, provided through context
#[derive(Clone, Copy)]
pub struct ModalService {
    state: RwSignal<ModalState>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::default()),
        }
    }

    pub fn open(&self, kind: ModalKind) {
        self.state.update(|s| {
            s.open(kind);
        });
    }

    pub fn close(&self) {
        self.state.update(|s| {
            s.close();
        });
    }

    pub fn finish(&self) {
        self.state.update(ModalState::finish);
    }

    pub fn set_busy(&self, busy: bool) {
        self.state.update(|s| s.busy = busy);
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.busy)
    }

    pub fn current(&self) -> Option<ModalKind> {
        self.state.with(|s| s.current.clone())
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> ModalKind {
        ModalKind::ProductWizard { product_id: None }
    }

    #[test]
    fn test_busy_blocks_close_and_open() {
        let mut state = ModalState::default();
        assert!(state.open(wizard()));
        state.busy = true;
        assert!(!state.close());
        assert!(!state.open(ModalKind::ConfirmDelete(DeleteTarget::Batch {
            id: BatchId::new("b1"),
            number: "UG-001".into(),
        })));
        assert_eq!(state.current, Some(wizard()));

        state.finish();
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn test_close_when_idle() {
        let mut state = ModalState::default();
        state.open(wizard());
        assert!(state.close());
        assert!(state.current.is_none());
    }

    #[test]
    fn test_delete_prompts() {
        let target = DeleteTarget::Product {
            id: ProductId::new("urea-gold"),
            name: "Urea Gold".into(),
        };
        assert!(target.prompt().contains("\"Urea Gold\" and all of its batches"));
    }
}
