use super::bill::ExtractedBill;
use crate::error::Result;

/// Supplies the structured bill produced by the extraction service.
pub trait BillSource {
    fn load(&self) -> Result<ExtractedBill>;
}

pub type BillSourceBox = Box<dyn BillSource>;
