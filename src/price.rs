use crate::amount::CurrencyAmount;
use crate::error::SdkError;
use crate::math::Fraction;
use crate::token::Currency;
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

/// Exchange rate of `base` denominated in `quote`, in raw units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Price {
    base: Currency,
    quote: Currency,
    fraction: Fraction,
    // converts the raw ratio into whole-unit terms
    scalar: Fraction,
}

impl Price {
    /// `numerator / denominator` units of `quote` per unit of `base`.
    pub fn new(base: Currency, quote: Currency, denominator: impl Into<BigInt>, numerator: impl Into<BigInt>) -> Self {
        let scalar = Fraction::new(BigInt::from(10).pow(base.decimals() as u32), BigInt::from(10).pow(quote.decimals() as u32));
        Self { base, quote, fraction: Fraction::new(numerator, denominator), scalar }
    }

    pub fn from_amounts(base_amount: &CurrencyAmount, quote_amount: &CurrencyAmount) -> Self {
        Self::new(base_amount.currency().clone(), quote_amount.currency().clone(), base_amount.quotient(), quote_amount.quotient())
    }

    pub fn base(&self) -> &Currency {
        &self.base
    }

    pub fn quote_currency(&self) -> &Currency {
        &self.quote
    }

    pub fn raw(&self) -> &Fraction {
        &self.fraction
    }

    pub fn adjusted_for_decimals(&self) -> Fraction {
        &self.fraction * &self.scalar
    }

    pub fn invert(&self) -> Price {
        Price::new(self.quote.clone(), self.base.clone(), self.fraction.numerator().clone(), self.fraction.denominator().clone())
    }

    /// Chains `base -> quote` with `other.base -> other.quote`; `other.base` must be this price's quote.
    pub fn multiply(&self, other: &Price) -> Result<Price, SdkError> {
        if self.quote != other.base {
            return Err(SdkError::CurrencyMismatch);
        }
        let fraction = &self.fraction * &other.fraction;
        Ok(Price::new(self.base.clone(), other.quote.clone(), fraction.denominator().clone(), fraction.numerator().clone()))
    }

    /// Converts an amount of `base` into `quote` at this price.
    pub fn quote(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount, SdkError> {
        if amount.currency() != &self.base {
            return Err(SdkError::CurrencyMismatch);
        }
        Ok(CurrencyAmount::with_fraction(self.quote.clone(), &self.fraction * amount.fraction()))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.fraction, self.quote, self.base)
    }
}
