//! Shared contracts: domain aggregates, projections and pure business rules
//! used by every screen of the inventory frontend.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
