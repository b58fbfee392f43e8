use crate::application::engine::DerivedTotals;
use crate::application::session::BillSession;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct ItemReport<'a> {
    pub item: &'a str,
    pub qty: String,
    pub amount: String,
    pub selected: Vec<&'a str>,
    pub tax: String,
    pub total: String,
}

#[derive(Debug, Serialize)]
pub struct AttendeeReport<'a> {
    pub attendee: &'a str,
    pub total: String,
}

/// Display-ready view of a session's totals. Currency is rendered as strings
/// with two decimals; the tax rate keeps full precision.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub tax_rate: String,
    pub items: Vec<ItemReport<'a>>,
    pub attendees: Vec<AttendeeReport<'a>>,
    pub grand_total: String,
    pub total_payable: String,
    pub unclaimed: String,
    pub drift: String,
}

impl<'a> JsonReport<'a> {
    pub fn new(session: &'a BillSession, totals: &DerivedTotals) -> Self {
        let attendees = session.attendees();
        let items = session
            .bill()
            .items
            .iter()
            .zip(&totals.items)
            .enumerate()
            .map(|(index, (item, allocation))| ItemReport {
                item: &item.name,
                qty: item.quantity.normalize().to_string(),
                amount: item.amount.to_display(),
                selected: session
                    .selections()
                    .selectors(index)
                    .filter_map(|attendee| attendees.get(attendee))
                    .map(|attendee| attendee.name.as_str())
                    .collect(),
                tax: allocation.prorated_tax.to_display(),
                total: allocation.prorated_total.to_display(),
            })
            .collect();

        Self {
            tax_rate: totals.tax_rate.value().normalize().to_string(),
            items,
            attendees: attendees
                .iter()
                .zip(&totals.attendees)
                .map(|(attendee, total)| AttendeeReport {
                    attendee: &attendee.name,
                    total: total.total.to_display(),
                })
                .collect(),
            grand_total: totals.grand_total.to_display(),
            total_payable: session.bill().bill_summary.total_payable.to_display(),
            unclaimed: totals.unclaimed.to_display(),
            drift: totals.drift.to_display(),
        }
    }

    pub fn write<W: Write>(&self, mut sink: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut sink, self)?;
        writeln!(sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::on_selection_changed;
    use crate::domain::attendee::Attendee;
    use crate::interfaces::json::extraction_parser::parse_extraction;
    use serde_json::Value;

    #[test]
    fn test_json_report() {
        let bill = parse_extraction(
            r#"{"bill_summary": {"sub_total": 500, "service_charge": 25, "cgst": 12.5, "sgst": 12.5, "total_payable": 550},
                "items": [{"item": "Pizza", "qty": 1, "amount": 400}, {"item": "Coke", "qty": 2, "amount": 100}]}"#,
        )
        .unwrap();
        let mut session = BillSession::new(bill, vec![Attendee::new("A"), Attendee::new("B")]).unwrap();
        on_selection_changed(&mut session, 0, 0, true).unwrap();
        let totals = on_selection_changed(&mut session, 0, 1, true).unwrap();

        let mut out = Vec::new();
        JsonReport::new(&session, &totals).write(&mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["tax_rate"], "0.1");
        assert_eq!(value["items"][0]["selected"], serde_json::json!(["A", "B"]));
        assert_eq!(value["items"][0]["total"], "220.00");
        assert_eq!(value["items"][1]["total"], "0.00");
        assert_eq!(value["attendees"][1]["total"], "220.00");
        assert_eq!(value["grand_total"], "440.00");
        assert_eq!(value["unclaimed"], "110.00");
        assert_eq!(value["drift"], "-110.00");
    }
}
