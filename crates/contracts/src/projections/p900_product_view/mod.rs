pub mod dto;

pub use dto::{ExpiryGate, ProductView, ViewTab};
