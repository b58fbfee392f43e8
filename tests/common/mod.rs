#![allow(dead_code)]

use bill_splitter::domain::bill::{BillItem, BillSummary, ExtractedBill};
use bill_splitter::domain::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn summary(subtotal: Decimal, service: Decimal, cgst: Decimal, sgst: Decimal, payable: Decimal) -> BillSummary {
    BillSummary {
        subtotal: Money::new(subtotal),
        service_charge: Money::new(service),
        cgst: Money::new(cgst),
        sgst: Money::new(sgst),
        total_payable: Money::new(payable),
    }
}

pub fn item(name: &str, qty: Decimal, amount: Decimal) -> BillItem {
    BillItem::new(name, qty, Money::new(amount))
}

/// Pizza and Coke for two, 10% in surcharges.
pub fn pizza_night() -> ExtractedBill {
    ExtractedBill {
        bill_summary: summary(dec!(500), dec!(25), dec!(12.5), dec!(12.5), dec!(550)),
        items: vec![
            item("Pizza", dec!(1), dec!(400)),
            item("Coke", dec!(2), dec!(100)),
        ],
    }
}

/// Writes a selection toggle CSV selecting attendee `i % attendees` for
/// item `i % items`, `rows` times.
pub fn generate_selections(path: &Path, rows: usize, items: usize, attendees: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["item", "attendee", "selected"])?;
    for i in 0..rows {
        wtr.write_record([
            (i % items).to_string(),
            (i % attendees).to_string(),
            "true".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
