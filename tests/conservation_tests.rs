mod common;

use bill_splitter::application::engine::recompute;
use bill_splitter::domain::bill::BillItem;
use bill_splitter::domain::money::Money;
use bill_splitter::domain::selection::SelectionMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_totals_are_conserved_for_random_selections() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let item_count = rng.gen_range(0..=25);
        let attendee_count = rng.gen_range(1..=15);

        let items: Vec<BillItem> = (0..item_count)
            .map(|i| {
                common::item(
                    &format!("item {}", i),
                    Decimal::from(rng.gen_range(1..=4)),
                    Decimal::new(rng.gen_range(0..250_000), 2),
                )
            })
            .collect();
        let subtotal: Decimal = items.iter().map(|item| item.amount.value()).sum();
        let summary = common::summary(
            subtotal,
            Decimal::new(rng.gen_range(0..5_000), 2),
            Decimal::new(rng.gen_range(0..2_000), 2),
            Decimal::new(rng.gen_range(0..2_000), 2),
            subtotal,
        );

        let mut selections = SelectionMatrix::new(item_count, attendee_count);
        for item in 0..item_count {
            for attendee in 0..attendee_count {
                selections.set(item, attendee, rng.gen_bool(0.4)).unwrap();
            }
        }

        let derived = recompute(&items, &selections, &summary, attendee_count);
        let attendee_sum: Money = derived.attendees.iter().map(|t| t.total).sum();
        let claimed_sum: Money = derived.items.iter().map(|a| a.claimed_total()).sum();

        assert_eq!(attendee_sum, derived.grand_total);
        assert!(
            (attendee_sum.value() - claimed_sum.value()).abs() <= dec!(0.000000001),
            "attendees {} vs items {}",
            attendee_sum.value(),
            claimed_sum.value()
        );
        assert!(
            (derived.grand_total + derived.unclaimed - Money::new(subtotal + summary.surcharges().value()))
                .value()
                .abs()
                <= dec!(0.000000001)
                || subtotal.is_zero()
        );
    }
}
