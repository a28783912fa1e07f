use alloy_primitives::U256;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

/// Exact rational number. Values are kept unreduced, the sign always lives in the numerator.
///
/// All on-chain amounts are derived from it through [`Fraction::quotient`], which floors exactly
/// the way the contracts' integer division does.
#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

pub fn u256_to_bigint(value: U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>())
}

impl Fraction {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_negative() { Self { numerator: -numerator, denominator: -denominator } } else { Self { numerator, denominator } }
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), BigInt::one())
    }

    pub fn one() -> Self {
        Self::new(BigInt::one(), BigInt::one())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Floor of the value.
    pub fn quotient(&self) -> BigInt {
        self.numerator.div_floor(&self.denominator)
    }

    /// What is left after taking the quotient, over the same denominator.
    pub fn remainder(&self) -> Fraction {
        Fraction::new(self.numerator.mod_floor(&self.denominator), self.denominator.clone())
    }

    pub fn invert(&self) -> Fraction {
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::new(value, BigInt::one())
    }
}

impl From<u64> for Fraction {
    fn from(value: u64) -> Self {
        Fraction::new(value, 1u64)
    }
}

impl From<U256> for Fraction {
    fn from(value: U256) -> Self {
        Fraction::new(u256_to_bigint(value), BigInt::one())
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        if self.denominator == rhs.denominator {
            return Fraction::new(&self.numerator + &rhs.numerator, self.denominator.clone());
        }
        Fraction::new(&self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator, &self.denominator * &rhs.denominator)
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        if self.denominator == rhs.denominator {
            return Fraction::new(&self.numerator - &rhs.numerator, self.denominator.clone());
        }
        Fraction::new(&self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator, &self.denominator * &rhs.denominator)
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::new(&self.numerator * &rhs.numerator, &self.denominator * &rhs.denominator)
    }
}

impl Div for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: &Fraction) -> Fraction {
        Fraction::new(&self.numerator * &rhs.denominator, &self.denominator * &rhs.numerator)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        &self - &rhs
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        &self / &rhs
    }
}
