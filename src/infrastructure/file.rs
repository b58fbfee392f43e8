use crate::domain::bill::ExtractedBill;
use crate::domain::ports::BillSource;
use crate::error::Result;
use crate::interfaces::json::extraction_parser::parse_extraction;
use std::path::PathBuf;
use tracing::info;

/// Loads a bill from a saved extraction response on disk.
///
/// The file may hold the bare bill JSON or the service's full text response.
#[derive(Debug, Clone)]
pub struct FileBillSource {
    path: PathBuf,
}

impl FileBillSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BillSource for FileBillSource {
    fn load(&self) -> Result<ExtractedBill> {
        let response = std::fs::read_to_string(&self.path)?;
        let bill = parse_extraction(&response)?;
        info!(
            path = %self.path.display(),
            items = bill.items.len(),
            "loaded bill"
        );
        Ok(bill)
    }
}
