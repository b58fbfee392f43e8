//! Boundary adapters: the extraction response parser, the selection toggle
//! reader and the report writers.

pub mod csv;
pub mod json;
