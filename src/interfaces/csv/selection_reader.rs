use crate::error::{Result, SplitError};
use serde::Deserialize;
use std::io::Read;

/// A single checkbox toggle: attendee `attendee` (0-based) starts or stops
/// sharing item `item` (0-based).
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct SelectionEvent {
    pub item: usize,
    pub attendee: usize,
    /// Absent means the attendee is being selected.
    #[serde(default)]
    pub selected: Option<bool>,
}

impl SelectionEvent {
    pub fn is_selected(&self) -> bool {
        self.selected.unwrap_or(true)
    }
}

/// Reads selection toggles from a CSV source with an
/// `item,attendee,selected` header.
///
/// Whitespace is trimmed and the `selected` column may be left out.
pub struct SelectionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SelectionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields toggles in file order.
    pub fn events(self) -> impl Iterator<Item = Result<SelectionEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SplitError::from))
    }
}
