//! Adapters implementing the [`BillSource`](crate::domain::ports::BillSource) port.

pub mod file;
pub mod in_memory;
