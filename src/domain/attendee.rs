use crate::error::{Result, SplitError};
use serde::Serialize;

/// A person sharing the bill.
///
/// Attendees are identified by their position, so two attendees may share a
/// name and still be charged separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendee {
    pub name: String,
}

impl Attendee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Parses a comma separated list of names, keeping input order.
///
/// Names are trimmed and blank entries dropped.
pub fn parse_attendees(list: &str) -> Result<Vec<Attendee>> {
    let attendees: Vec<Attendee> = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Attendee::new)
        .collect();

    if attendees.is_empty() {
        return Err(SplitError::Validation(
            "at least one attendee is required".to_string(),
        ));
    }
    Ok(attendees)
}
