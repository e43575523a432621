//! Product wizard (create / update)
//!
//! - form_state.rs: framework-free step machine and payload building
//! - view_model.rs: signals, load and submit commands
//! - page.rs: wizard shell (step bar, navigation)
//! - steps/: one component per step

pub mod form_state;
mod page;
mod steps;
mod view_model;

pub use page::ProductWizard;
pub use view_model::ProductWizardVm;
