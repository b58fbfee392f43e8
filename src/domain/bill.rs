use super::money::{Money, zero_if_unusable};
use crate::error::{Result, SplitError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Largest magnitude accepted for any amount on a bill.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Largest surcharge rate accepted, as a ratio of the subtotal.
pub const MAX_TAX_RATE: Decimal = dec!(100);

/// A single priced line of the bill.
///
/// `amount` is the pre-tax cost of the whole line, not a per-unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    #[serde(rename = "item")]
    pub name: String,
    #[serde(rename = "qty", default = "default_quantity")]
    pub quantity: Decimal,
    pub amount: Money,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl BillItem {
    pub fn new(name: impl Into<String>, quantity: Decimal, amount: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            amount,
        }
    }
}

/// Aggregate charges printed at the foot of the bill.
///
/// Every field is an absolute amount rather than a rate. Charges the
/// extraction did not report are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BillSummary {
    #[serde(rename = "sub_total", default, deserialize_with = "zero_if_unusable")]
    pub subtotal: Money,
    #[serde(default, deserialize_with = "zero_if_unusable")]
    pub service_charge: Money,
    #[serde(default, deserialize_with = "zero_if_unusable")]
    pub cgst: Money,
    #[serde(default, deserialize_with = "zero_if_unusable")]
    pub sgst: Money,
    #[serde(default, deserialize_with = "zero_if_unusable")]
    pub total_payable: Money,
}

impl BillSummary {
    /// Service charge plus both GST components.
    pub fn surcharges(&self) -> Money {
        self.service_charge + self.cgst + self.sgst
    }
}

/// The structured bill handed back by the extraction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedBill {
    pub bill_summary: BillSummary,
    pub items: Vec<BillItem>,
}

fn check_amount(field: &str, amount: Money) -> Result<()> {
    if amount.value().abs() > MAX_AMOUNT {
        return Err(SplitError::Validation(format!(
            "{} {} exceeds the largest supported amount {}",
            field,
            amount.value(),
            MAX_AMOUNT
        )));
    }
    Ok(())
}

impl ExtractedBill {
    /// Rejects bills whose amounts or surcharge rate are too large to
    /// allocate without overflowing.
    ///
    /// Within these limits every item's share stays below
    /// `MAX_AMOUNT * (1 + MAX_TAX_RATE)`.
    pub fn validate(&self) -> Result<()> {
        let summary = &self.bill_summary;
        check_amount("sub_total", summary.subtotal)?;
        check_amount("service_charge", summary.service_charge)?;
        check_amount("cgst", summary.cgst)?;
        check_amount("sgst", summary.sgst)?;
        check_amount("total_payable", summary.total_payable)?;
        for item in &self.items {
            check_amount(&format!("amount of '{}'", item.name), item.amount)?;
        }

        let subtotal = summary.subtotal.value();
        if subtotal > Decimal::ZERO && summary.surcharges().value().abs() > subtotal * MAX_TAX_RATE {
            return Err(SplitError::Validation(format!(
                "surcharges {} are more than {} times the subtotal {}",
                summary.surcharges().value(),
                MAX_TAX_RATE,
                subtotal
            )));
        }
        Ok(())
    }
}
