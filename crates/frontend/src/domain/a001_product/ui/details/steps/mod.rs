mod application_safety;
mod basic_info;
mod composition_batch;
mod documents_contact;
mod fields;

pub use application_safety::ApplicationSafetyStep;
pub use basic_info::BasicInfoStep;
pub use composition_batch::CompositionBatchStep;
pub use documents_contact::DocumentsContactStep;
