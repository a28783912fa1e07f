use super::fraction::Fraction;
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(Fraction);

impl Percent {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Percent(Fraction::new(numerator, denominator))
    }

    /// Basis points, i.e. `bps / 10_000`.
    pub fn from_bps(bps: u32) -> Self {
        Percent::new(bps, 10_000u32)
    }

    pub fn zero() -> Self {
        Percent(Fraction::zero())
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl From<Fraction> for Percent {
    fn from(fraction: Fraction) -> Self {
        Percent(fraction)
    }
}

impl Display for Percent {
    // two decimal places, truncated
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hundredths: BigInt = self.0.numerator() * BigInt::from(10_000) / self.0.denominator();
        let sign = if hundredths < BigInt::from(0) { "-" } else { "" };
        let magnitude = hundredths.magnitude();
        let whole = (magnitude / 100u32).to_string();
        let rest = (magnitude % 100u32).to_string();
        write!(f, "{sign}{whole}.{rest:0>2}%")
    }
}
