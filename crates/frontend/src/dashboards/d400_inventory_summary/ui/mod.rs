mod dashboard;
mod modal_host;

pub use dashboard::InventoryDashboard;
