use crate::application::engine::DerivedTotals;
use crate::application::session::BillSession;
use crate::domain::money::Money;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

pub const GRAND_TOTAL_LABEL: &str = "Grand Total";

#[derive(Serialize)]
struct AttendeeRow<'a> {
    attendee: &'a str,
    total: String,
}

#[derive(Serialize)]
struct ItemRow<'a> {
    item: &'a str,
    qty: String,
    amount: String,
    selected: String,
    tax: String,
    total: String,
}

/// Writes derived totals as CSV with every currency cell at two decimals.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    currency: String,
}

impl<W: Write> ReportWriter<W> {
    /// `currency` is prefixed to every currency cell, e.g. `₹`.
    pub fn new(sink: W, currency: impl Into<String>) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            currency: currency.into(),
        }
    }

    fn money(&self, amount: Money) -> String {
        format!("{}{}", self.currency, amount.to_display())
    }

    /// One `attendee,total` row per attendee in attendee order, followed by
    /// the grand total.
    pub fn write_attendees(&mut self, session: &BillSession, totals: &DerivedTotals) -> Result<()> {
        for (attendee, total) in session.attendees().iter().zip(&totals.attendees) {
            let row = AttendeeRow {
                attendee: &attendee.name,
                total: self.money(total.total),
            };
            self.writer.serialize(row)?;
        }
        let row = AttendeeRow {
            attendee: GRAND_TOTAL_LABEL,
            total: self.money(totals.grand_total),
        };
        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }

    /// One row per bill item with the names of the attendees sharing it
    /// joined by `;` and the per-attendee tax and total.
    pub fn write_items(&mut self, session: &BillSession, totals: &DerivedTotals) -> Result<()> {
        let attendees = session.attendees();
        for (index, (item, allocation)) in session.bill().items.iter().zip(&totals.items).enumerate() {
            let selected = session
                .selections()
                .selectors(index)
                .filter_map(|attendee| attendees.get(attendee))
                .map(|attendee| attendee.name.as_str())
                .collect::<Vec<_>>()
                .join(";");
            let row = ItemRow {
                item: &item.name,
                qty: item.quantity.normalize().to_string(),
                amount: self.money(item.amount),
                selected,
                tax: self.money(allocation.prorated_tax),
                total: self.money(allocation.prorated_total),
            };
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
