use crate::error::SdkError;
use crate::math::{Fraction, u256_to_bigint};
use crate::token::Currency;
use alloy_primitives::U256;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::fmt::{Display, Formatter};

/// An exact quantity of a currency in its smallest unit.
///
/// Construction accepts any sign so that `subtract` stays total. Pair math and `to_u256` reject
/// negative amounts with `NegativeAmount`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    fraction: Fraction,
}

impl CurrencyAmount {
    pub fn from_raw_amount(currency: impl Into<Currency>, raw_amount: impl Into<BigInt>) -> Self {
        Self { currency: currency.into(), fraction: Fraction::from(raw_amount.into()) }
    }

    pub fn from_fractional_amount(currency: impl Into<Currency>, numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self { currency: currency.into(), fraction: Fraction::new(numerator, denominator) }
    }

    pub fn from_u256(currency: impl Into<Currency>, raw_amount: U256) -> Self {
        Self::from_raw_amount(currency, u256_to_bigint(raw_amount))
    }

    pub(crate) fn with_fraction(currency: Currency, fraction: Fraction) -> Self {
        Self { currency, fraction }
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Whole raw units, floored.
    pub fn quotient(&self) -> BigInt {
        self.fraction.quotient()
    }

    pub fn is_zero(&self) -> bool {
        self.quotient().is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.fraction.is_negative()
    }

    /// The raw amount as an on-chain `uint256` argument.
    pub fn to_u256(&self) -> Result<U256, SdkError> {
        let (sign, bytes) = self.quotient().to_bytes_be();
        if sign == Sign::Minus {
            return Err(SdkError::NegativeAmount);
        }
        U256::try_from_be_slice(&bytes).ok_or(SdkError::Overflow)
    }

    /// Same quantity expressed in the wrapped token, for use against pair reserves.
    pub fn wrapped(&self) -> CurrencyAmount {
        if self.currency.is_token() {
            return self.clone();
        }
        Self { currency: Currency::Token(self.currency.wrapped().clone()), fraction: self.fraction.clone() }
    }

    pub fn add(&self, other: &CurrencyAmount) -> Result<CurrencyAmount, SdkError> {
        if self.currency != other.currency {
            return Err(SdkError::CurrencyMismatch);
        }
        Ok(Self { currency: self.currency.clone(), fraction: &self.fraction + &other.fraction })
    }

    pub fn subtract(&self, other: &CurrencyAmount) -> Result<CurrencyAmount, SdkError> {
        if self.currency != other.currency {
            return Err(SdkError::CurrencyMismatch);
        }
        Ok(Self { currency: self.currency.clone(), fraction: &self.fraction - &other.fraction })
    }

    /// Decimal representation of the floored raw amount, e.g. `1.5` for 15 units of a 1-decimal token.
    pub fn to_exact(&self) -> String {
        let raw = self.quotient();
        let decimals = self.currency.decimals() as usize;
        if decimals == 0 {
            return raw.to_string();
        }
        let sign = if raw.sign() == Sign::Minus { "-" } else { "" };
        let digits = raw.magnitude().to_string();
        let padded = format!("{digits:0>width$}", width = decimals + 1);
        let (whole, fractional) = padded.split_at(padded.len() - decimals);
        let fractional = fractional.trim_end_matches('0');
        if fractional.is_empty() { format!("{sign}{whole}") } else { format!("{sign}{whole}.{fractional}") }
    }
}

impl Display for CurrencyAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency)
    }
}
