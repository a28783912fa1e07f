use crate::amount::CurrencyAmount;
use crate::error::SdkError;
use crate::math::{Fraction, Percent};
use crate::pair::Pair;
use crate::price::Price;
use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use strum_macros::{Display, EnumIter, EnumString, VariantNames};
use tracing::debug;

#[derive(Copy, Clone, Debug, Display, PartialEq, Hash, Eq, EnumString, VariantNames, Deserialize, Serialize, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// A trade over a fixed route, assuming no other trade moves the reserves first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    // output per input actually received
    execution_price: Price,
    next_mid_price: Price,
    price_impact: Percent,
}

impl Display for Trade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {} via {}", self.trade_type, self.input_amount, self.output_amount, self.route)
    }
}

impl Trade {
    pub fn exact_in(route: Route, amount_in: &CurrencyAmount) -> Result<Self, SdkError> {
        Self::new(route, amount_in, TradeType::ExactInput)
    }

    pub fn exact_out(route: Route, amount_out: &CurrencyAmount) -> Result<Self, SdkError> {
        Self::new(route, amount_out, TradeType::ExactOutput)
    }

    /// Walks the route forward for exact input or backward for exact output. `amount` must be in the
    /// route's input or output currency respectively.
    pub fn new(route: Route, amount: &CurrencyAmount, trade_type: TradeType) -> Result<Self, SdkError> {
        let (input_amount, output_amount, next_pairs) = match trade_type {
            TradeType::ExactInput => {
                if amount.currency() != route.input() {
                    return Err(SdkError::CurrencyMismatch);
                }
                let mut next_pairs: Vec<Pair> = Vec::with_capacity(route.len());
                let mut current = amount.clone();
                for pair in route.pairs() {
                    let (output, next_pair) = pair.get_output_amount(&current)?;
                    next_pairs.push(next_pair);
                    current = output;
                }
                let output = CurrencyAmount::with_fraction(route.output().clone(), current.fraction().clone());
                (amount.clone(), output, next_pairs)
            }
            TradeType::ExactOutput => {
                if amount.currency() != route.output() {
                    return Err(SdkError::CurrencyMismatch);
                }
                let mut next_pairs: Vec<Pair> = Vec::with_capacity(route.len());
                let mut current = amount.clone();
                for pair in route.pairs().iter().rev() {
                    let (input, next_pair) = pair.get_input_amount(&current)?;
                    next_pairs.push(next_pair);
                    current = input;
                }
                next_pairs.reverse();
                let input = CurrencyAmount::with_fraction(route.input().clone(), current.fraction().clone());
                (input, amount.clone(), next_pairs)
            }
        };

        let next_route = Route::new(next_pairs, route.input().clone(), Some(route.output().clone()))?;
        let next_mid_price = next_route.mid_price().clone();
        let execution_price = Price::from_amounts(&input_amount, &output_amount);
        let price_impact = compute_price_impact(route.mid_price(), &input_amount, &output_amount);

        debug!(%route, %trade_type, input = %input_amount, output = %output_amount, %price_impact, "trade constructed");

        Ok(Self { route, trade_type, input_amount, output_amount, execution_price, next_mid_price, price_impact })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    pub fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    pub fn next_mid_price(&self) -> &Price {
        &self.next_mid_price
    }

    pub fn price_impact(&self) -> &Percent {
        &self.price_impact
    }

    /// Least output to accept given `slippage_tolerance`. Exact output trades return their output.
    pub fn minimum_amount_out(&self, slippage_tolerance: &Percent) -> Result<CurrencyAmount, SdkError> {
        if slippage_tolerance.is_negative() {
            return Err(SdkError::InvalidSlippageTolerance);
        }
        if self.trade_type == TradeType::ExactOutput {
            return Ok(self.output_amount.clone());
        }

        let adjusted = (&Fraction::one() + slippage_tolerance.as_fraction()).invert() * Fraction::from(self.output_amount.quotient());
        Ok(CurrencyAmount::from_raw_amount(self.output_amount.currency().clone(), adjusted.quotient()))
    }

    /// Most input to spend given `slippage_tolerance`. Exact input trades return their input.
    pub fn maximum_amount_in(&self, slippage_tolerance: &Percent) -> Result<CurrencyAmount, SdkError> {
        if slippage_tolerance.is_negative() {
            return Err(SdkError::InvalidSlippageTolerance);
        }
        if self.trade_type == TradeType::ExactInput {
            return Ok(self.input_amount.clone());
        }

        let adjusted = &(&Fraction::one() + slippage_tolerance.as_fraction()) * &Fraction::from(self.input_amount.quotient());
        Ok(CurrencyAmount::from_raw_amount(self.input_amount.currency().clone(), adjusted.quotient()))
    }

    /// Execution price after the worst slippage the tolerance allows.
    pub fn worst_execution_price(&self, slippage_tolerance: &Percent) -> Result<Price, SdkError> {
        let maximum_in = self.maximum_amount_in(slippage_tolerance)?;
        let minimum_out = self.minimum_amount_out(slippage_tolerance)?;
        Ok(Price::from_amounts(&maximum_in, &minimum_out))
    }
}

fn compute_price_impact(mid_price: &Price, input_amount: &CurrencyAmount, output_amount: &CurrencyAmount) -> Percent {
    let exact_quote = mid_price.raw() * &Fraction::from(input_amount.quotient());
    let slippage = &(&exact_quote - &Fraction::from(output_amount.quotient())) / &exact_quote;
    Percent::from(slippage)
}

// ties on amounts resolve by exact value, not by the floored quotient
fn input_output_comparator(a: &Trade, b: &Trade) -> Ordering {
    b.output_amount
        .fraction()
        .cmp(a.output_amount.fraction())
        .then_with(|| a.input_amount.fraction().cmp(b.input_amount.fraction()))
}

/// Orders trades best first: more output, then less input, then lower price impact, then fewer hops.
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    input_output_comparator(a, b)
        .then_with(|| a.price_impact.cmp(&b.price_impact))
        .then_with(|| a.route.path().len().cmp(&b.route.path().len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use crate::token::Currency;
    use num_bigint::BigInt;

    fn route_0_1_2() -> Route {
        Route::new(vec![PAIR_0_1.clone(), PAIR_1_2.clone()], T0.clone(), None).unwrap()
    }

    #[test]
    fn test_ether_as_input() -> eyre::Result<()> {
        let route = Route::new(vec![PAIR_WETH_0.clone()], ETHER.clone(), Some(T0.clone().into()))?;

        let trade = Trade::new(route.clone(), &amount(ETHER.clone(), 100), TradeType::ExactInput)?;
        assert_eq!(trade.input_amount().currency(), &*ETHER);
        assert_eq!(trade.output_amount().currency(), &Currency::Token(T0.clone()));

        let trade = Trade::new(route, &amount(T0.clone(), 100), TradeType::ExactOutput)?;
        assert_eq!(trade.input_amount().currency(), &*ETHER);
        assert_eq!(trade.output_amount().currency(), &Currency::Token(T0.clone()));
        Ok(())
    }

    #[test]
    fn test_ether_as_output() -> eyre::Result<()> {
        let route = Route::new(vec![PAIR_WETH_0.clone()], T0.clone(), Some(ETHER.clone()))?;

        let trade = Trade::new(route.clone(), &amount(ETHER.clone(), 100), TradeType::ExactOutput)?;
        assert_eq!(trade.input_amount().currency(), &Currency::Token(T0.clone()));
        assert_eq!(trade.output_amount().currency(), &*ETHER);

        let trade = Trade::new(route, &amount(T0.clone(), 100), TradeType::ExactInput)?;
        assert_eq!(trade.input_amount().currency(), &Currency::Token(T0.clone()));
        assert_eq!(trade.output_amount().currency(), &*ETHER);
        Ok(())
    }

    #[test]
    fn test_amount_must_match_route_side() {
        let route = route_0_1_2();
        assert!(matches!(Trade::exact_in(route.clone(), &amount(T2.clone(), 100)), Err(SdkError::CurrencyMismatch)));
        assert!(matches!(Trade::exact_out(route, &amount(T0.clone(), 100)), Err(SdkError::CurrencyMismatch)));
    }

    #[test]
    fn test_exact_in_amounts_and_prices() -> eyre::Result<()> {
        let trade = Trade::exact_in(route_0_1_2(), &amount(T0.clone(), 100))?;

        assert_eq!(trade.trade_type(), TradeType::ExactInput);
        assert_eq!(trade.input_amount(), &amount(T0.clone(), 100));
        assert_eq!(trade.output_amount(), &amount(T2.clone(), 69));
        assert_eq!(trade.execution_price().raw(), &Fraction::new(69, 100));

        // mid price 1 * 1000/1200, next pairs are (1100, 910) and (1290, 931)
        assert_eq!(trade.route().mid_price().raw(), &Fraction::new(1000, 1200));
        assert_eq!(trade.next_mid_price().raw(), &Fraction::new(910 * 931, 1100 * 1290));

        let expected_impact = &(&Fraction::new(100_000, 1200) - &Fraction::from(69u64)) / &Fraction::new(100_000, 1200);
        assert_eq!(trade.price_impact().as_fraction(), &expected_impact);
        assert!(!trade.price_impact().is_negative());
        Ok(())
    }

    #[test]
    fn test_exact_out_amounts() -> eyre::Result<()> {
        let trade = Trade::exact_out(route_0_1_2(), &amount(T2.clone(), 100))?;

        assert_eq!(trade.trade_type(), TradeType::ExactOutput);
        assert_eq!(trade.input_amount(), &amount(T0.clone(), 156));
        assert_eq!(trade.output_amount(), &amount(T2.clone(), 100));
        Ok(())
    }

    #[test]
    fn test_walk_propagates_liquidity_errors() {
        let route = Route::new(vec![EMPTY_PAIR_0_1.clone()], T0.clone(), None).unwrap();
        assert!(matches!(Trade::exact_in(route.clone(), &amount(T0.clone(), 100)), Err(SdkError::InsufficientReserves)));
        assert!(matches!(Trade::exact_out(route, &amount(T1.clone(), 100)), Err(SdkError::InsufficientReserves)));
    }

    #[test]
    fn test_maximum_amount_in() -> eyre::Result<()> {
        let exact_in = Trade::exact_in(route_0_1_2(), &amount(T0.clone(), 100))?;
        assert!(matches!(exact_in.maximum_amount_in(&Percent::new(-1, 100)), Err(SdkError::InvalidSlippageTolerance)));
        for tolerance in [0, 5, 200] {
            assert_eq!(exact_in.maximum_amount_in(&Percent::new(tolerance, 100))?, amount(T0.clone(), 100));
        }

        let exact_out = Trade::exact_out(route_0_1_2(), &amount(T2.clone(), 100))?;
        assert!(matches!(exact_out.maximum_amount_in(&Percent::new(-1, 100)), Err(SdkError::InvalidSlippageTolerance)));
        assert_eq!(exact_out.maximum_amount_in(&Percent::new(0, 100))?, exact_out.input_amount().clone());
        assert_eq!(exact_out.maximum_amount_in(&Percent::new(5, 100))?.quotient(), BigInt::from(163));
        assert_eq!(exact_out.maximum_amount_in(&Percent::new(200, 100))?.quotient(), BigInt::from(468));
        Ok(())
    }

    #[test]
    fn test_minimum_amount_out() -> eyre::Result<()> {
        let exact_in = Trade::exact_in(route_0_1_2(), &amount(T0.clone(), 100))?;
        assert!(matches!(exact_in.minimum_amount_out(&Percent::new(-1, 100)), Err(SdkError::InvalidSlippageTolerance)));
        assert_eq!(exact_in.minimum_amount_out(&Percent::new(0, 100))?, exact_in.output_amount().clone());
        assert_eq!(exact_in.minimum_amount_out(&Percent::new(5, 100))?.quotient(), BigInt::from(65));
        assert_eq!(exact_in.minimum_amount_out(&Percent::new(200, 100))?.quotient(), BigInt::from(23));

        let exact_out = Trade::exact_out(route_0_1_2(), &amount(T2.clone(), 100))?;
        assert!(matches!(exact_out.minimum_amount_out(&Percent::new(-1, 100)), Err(SdkError::InvalidSlippageTolerance)));
        for tolerance in [0, 5, 200] {
            assert_eq!(exact_out.minimum_amount_out(&Percent::new(tolerance, 100))?, amount(T2.clone(), 100));
        }
        Ok(())
    }

    #[test]
    fn test_worst_execution_price() -> eyre::Result<()> {
        let exact_in = Trade::exact_in(route_0_1_2(), &amount(T0.clone(), 100))?;
        assert_eq!(exact_in.worst_execution_price(&Percent::new(5, 100))?.raw(), &Fraction::new(65, 100));

        let exact_out = Trade::exact_out(route_0_1_2(), &amount(T2.clone(), 100))?;
        assert_eq!(exact_out.worst_execution_price(&Percent::new(5, 100))?.raw(), &Fraction::new(100, 163));
        Ok(())
    }

    #[test]
    fn test_comparator_prefers_output_then_input() -> eyre::Result<()> {
        let direct = Trade::exact_in(Route::new(vec![PAIR_0_2.clone()], T0.clone(), None)?, &amount(T0.clone(), 100))?;
        let two_hop = Trade::exact_in(route_0_1_2(), &amount(T0.clone(), 100))?;

        assert_eq!(trade_comparator(&direct, &two_hop), Ordering::Less);
        assert_eq!(trade_comparator(&two_hop, &direct), Ordering::Greater);
        assert_eq!(trade_comparator(&direct, &direct.clone()), Ordering::Equal);

        let cheaper = Trade::exact_out(Route::new(vec![PAIR_0_2.clone()], T0.clone(), None)?, &amount(T2.clone(), 100))?;
        let pricier = Trade::exact_out(route_0_1_2(), &amount(T2.clone(), 100))?;
        assert_eq!(trade_comparator(&cheaper, &pricier), Ordering::Less);
        Ok(())
    }

    #[test]
    fn test_trade_type_names() -> eyre::Result<()> {
        assert_eq!(TradeType::ExactInput.to_string(), "EXACT_INPUT");
        assert_eq!("EXACT_OUTPUT".parse::<TradeType>()?, TradeType::ExactOutput);
        assert_eq!(serde_json::to_string(&TradeType::ExactOutput)?, "\"EXACT_OUTPUT\"");
        Ok(())
    }
}
