pub mod aggregate;
pub mod status;

pub use aggregate::{Batch, BatchDto, BatchId};
pub use status::{BatchStatus, EXPIRY_WARNING_DAYS};
