pub mod dto;

pub use dto::InventorySummary;
