use crate::domain::bill::{BillItem, BillSummary};
use crate::domain::money::{Money, TaxRate};
use crate::domain::selection::SelectionMatrix;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

/// One item's per-selector share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ItemAllocation {
    /// Surcharge owed by each selector.
    pub prorated_tax: Money,
    /// Amount plus surcharge owed by each selector.
    pub prorated_total: Money,
    /// How many attendees share the item.
    pub selectors: usize,
}

impl ItemAllocation {
    /// The item's full cost across everyone sharing it.
    pub fn claimed_total(&self) -> Money {
        Money::new(self.prorated_total.value() * Decimal::from(self.selectors))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendeeTotal {
    /// Position of the attendee in the session's attendee list.
    pub attendee: usize,
    pub total: Money,
}

/// Everything derived from a bill and a selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedTotals {
    pub tax_rate: TaxRate,
    /// One entry per bill item, in bill order.
    pub items: Vec<ItemAllocation>,
    /// One entry per attendee, in attendee order.
    pub attendees: Vec<AttendeeTotal>,
    pub grand_total: Money,
    /// Cost of the items nobody has selected, surcharge included.
    pub unclaimed: Money,
    /// `grand_total - total_payable`. Reported as is, never corrected.
    pub drift: Money,
}

/// Derives the single surcharge rate applied to every item.
///
/// `(service_charge + cgst + sgst) / subtotal`, or zero when the subtotal is
/// not positive.
pub fn compute_tax_rate(summary: &BillSummary) -> TaxRate {
    if summary.subtotal.value() <= Decimal::ZERO {
        return TaxRate::ZERO;
    }
    TaxRate::new(summary.surcharges().value() / summary.subtotal.value())
}

/// Splits an item's tax and total evenly between its selectors.
///
/// An item nobody selected allocates nothing.
pub fn allocate_item(item: &BillItem, selected: &[usize], tax_rate: TaxRate) -> ItemAllocation {
    let selectors = selected.len();
    if selectors == 0 {
        return ItemAllocation::default();
    }

    let tax = tax_rate.surcharge_on(item.amount);
    ItemAllocation {
        prorated_tax: tax.split(selectors),
        prorated_total: (item.amount + tax).split(selectors),
        selectors,
    }
}

fn allocate_items(
    items: &[BillItem],
    selections: &SelectionMatrix,
    attendee_count: usize,
    tax_rate: TaxRate,
) -> Vec<(ItemAllocation, Vec<usize>)> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected: Vec<usize> = selections
                .selectors(index)
                .filter(|&attendee| attendee < attendee_count)
                .collect();
            (allocate_item(item, &selected, tax_rate), selected)
        })
        .collect()
}

fn accumulate(allocations: &[(ItemAllocation, Vec<usize>)], attendee_count: usize) -> Vec<AttendeeTotal> {
    let mut totals = vec![Money::ZERO; attendee_count];
    for (allocation, selected) in allocations {
        for &attendee in selected {
            totals[attendee] += allocation.prorated_total;
        }
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(attendee, total)| AttendeeTotal { attendee, total })
        .collect()
}

/// Sums each attendee's share of every item they selected.
///
/// The result has one entry per attendee column of `selections`, in order.
pub fn compute_attendee_totals(
    items: &[BillItem],
    selections: &SelectionMatrix,
    tax_rate: TaxRate,
) -> Vec<AttendeeTotal> {
    let attendee_count = selections.attendee_count();
    accumulate(
        &allocate_items(items, selections, attendee_count, tax_rate),
        attendee_count,
    )
}

pub fn compute_grand_total(attendee_totals: &[AttendeeTotal]) -> Money {
    attendee_totals.iter().map(|t| t.total).sum()
}

/// Recomputes every derived value from scratch.
///
/// Pure: the same inputs always produce identical output.
pub fn recompute(
    items: &[BillItem],
    selections: &SelectionMatrix,
    summary: &BillSummary,
    attendee_count: usize,
) -> DerivedTotals {
    let tax_rate = compute_tax_rate(summary);
    let allocations = allocate_items(items, selections, attendee_count, tax_rate);
    let attendees = accumulate(&allocations, attendee_count);
    let grand_total = compute_grand_total(&attendees);

    let unclaimed: Money = items
        .iter()
        .zip(&allocations)
        .filter(|(_, (allocation, _))| allocation.selectors == 0)
        .map(|(item, _)| item.amount + tax_rate.surcharge_on(item.amount))
        .sum();

    trace!(
        items = items.len(),
        attendees = attendee_count,
        grand_total = %grand_total.value(),
        "recomputed bill totals"
    );

    DerivedTotals {
        tax_rate,
        items: allocations.into_iter().map(|(allocation, _)| allocation).collect(),
        attendees,
        grand_total,
        unclaimed,
        drift: grand_total - summary.total_payable,
    }
}
