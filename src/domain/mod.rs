//! Domain layer: the bill data model and the ports it is loaded through.

pub mod attendee;
pub mod bill;
pub mod money;
pub mod ports;
pub mod selection;
