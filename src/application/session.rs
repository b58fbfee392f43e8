use super::engine::{self, DerivedTotals};
use crate::domain::attendee::Attendee;
use crate::domain::bill::ExtractedBill;
use crate::domain::selection::SelectionMatrix;
use crate::error::{Result, SplitError};
use tracing::debug;

/// Everything one bill-splitting session works on.
///
/// The bill and the attendee list are fixed for the life of the session.
/// Changing the attendees means starting a new session. Only the selections
/// change, and every change is followed by a full recompute.
#[derive(Debug, Clone)]
pub struct BillSession {
    bill: ExtractedBill,
    attendees: Vec<Attendee>,
    selections: SelectionMatrix,
}

impl BillSession {
    /// Starts a session with nothing selected.
    ///
    /// The bill must pass [`ExtractedBill::validate`].
    pub fn new(bill: ExtractedBill, attendees: Vec<Attendee>) -> Result<Self> {
        bill.validate()?;
        if attendees.is_empty() {
            return Err(SplitError::Validation(
                "at least one attendee is required".to_string(),
            ));
        }
        let selections = SelectionMatrix::new(bill.items.len(), attendees.len());
        Ok(Self {
            bill,
            attendees,
            selections,
        })
    }

    pub fn bill(&self) -> &ExtractedBill {
        &self.bill
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn selections(&self) -> &SelectionMatrix {
        &self.selections
    }

    /// Derives all totals for the current selections.
    pub fn totals(&self) -> DerivedTotals {
        engine::recompute(
            &self.bill.items,
            &self.selections,
            &self.bill.bill_summary,
            self.attendees.len(),
        )
    }
}

/// Applies one selection toggle and returns the recomputed totals.
///
/// Out of range indices are rejected and leave the session unchanged.
pub fn on_selection_changed(
    session: &mut BillSession,
    item: usize,
    attendee: usize,
    selected: bool,
) -> Result<DerivedTotals> {
    session.selections.set(item, attendee, selected)?;
    debug!(item, attendee, selected, "selection changed");
    Ok(session.totals())
}
