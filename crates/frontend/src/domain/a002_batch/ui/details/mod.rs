//! Batch form (add stock / update batch)
//!
//! - view_model.rs: form signals, load and save commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::BatchDetails;
pub use view_model::BatchDetailsVm;
