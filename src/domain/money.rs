use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Number of decimal places currency is shown with.
pub const DISPLAY_SCALE: u32 = 2;

/// A currency amount at full `Decimal` precision.
///
/// Amounts are never rounded while they are being accumulated. Rounding to
/// [`DISPLAY_SCALE`] places only happens in [`Money::to_display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Splits the amount evenly between `parts` payers.
    ///
    /// Returns zero when there is nobody to split between.
    pub fn split(self, parts: usize) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        Self(self.0 / Decimal::from(parts))
    }

    /// Rounds half away from zero to two places and renders with exactly two
    /// decimals, e.g. `220` becomes `"220.00"`.
    pub fn to_display(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        rounded.rescale(DISPLAY_SCALE);
        rounded.to_string()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + *m)
    }
}

/// The single surcharge ratio applied uniformly to every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The surcharge owed on `amount` at this rate.
    pub fn surcharge_on(&self, amount: Money) -> Money {
        Money(amount.0 * self.0)
    }
}

/// Deserializes a summary charge, treating a missing, `null` or non-numeric
/// value as zero. Numeric strings are accepted.
pub(crate) fn zero_if_unusable<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(Decimal),
        Unusable(IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Number(value) => Money(value),
        Lenient::Unusable(_) => Money::ZERO,
    })
}
