use crate::domain::bill::ExtractedBill;
use crate::domain::ports::BillSource;
use crate::error::Result;

/// Serves a bill that is already in memory.
///
/// Useful for tests and for callers that receive the extraction result over
/// their own transport.
#[derive(Debug, Clone)]
pub struct InMemoryBillSource {
    bill: ExtractedBill,
}

impl InMemoryBillSource {
    pub fn new(bill: ExtractedBill) -> Self {
        Self { bill }
    }
}

impl BillSource for InMemoryBillSource {
    fn load(&self) -> Result<ExtractedBill> {
        Ok(self.bill.clone())
    }
}
