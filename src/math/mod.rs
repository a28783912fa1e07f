pub mod fraction;
pub mod percent;

pub use fraction::{Fraction, u256_to_bigint};
pub use percent::Percent;
