use crate::amount::CurrencyAmount;
use crate::error::SdkError;
use crate::pair::Pair;
use crate::route::Route;
use crate::token::Currency;
use crate::trade::{Trade, trade_comparator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTradeOptions {
    /// How many trades to return at most.
    pub max_num_results: usize,
    /// Maximum number of pairs in a route.
    pub max_hops: usize,
}

impl Default for BestTradeOptions {
    fn default() -> Self {
        Self { max_num_results: 3, max_hops: 3 }
    }
}

impl BestTradeOptions {
    pub fn new(max_num_results: usize, max_hops: usize) -> Result<Self, SdkError> {
        let options = Self { max_num_results, max_hops };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.max_hops == 0 {
            return Err(SdkError::InvalidOption("max_hops must be at least 1"));
        }
        if self.max_num_results == 0 {
            return Err(SdkError::InvalidOption("max_num_results must be at least 1"));
        }
        Ok(())
    }
}

/// Inserts `item` into the sorted `items`, keeping at most `max_size` entries. Equal items keep
/// insertion order. Returns whatever fell off the end, which may be `item` itself.
pub fn sorted_insert<T>(items: &mut Vec<T>, item: T, max_size: usize, comparator: impl Fn(&T, &T) -> Ordering) -> Option<T> {
    let index = items.partition_point(|existing| comparator(existing, &item) != Ordering::Greater);
    if items.len() >= max_size && index == items.len() {
        return Some(item);
    }
    items.insert(index, item);
    if items.len() > max_size { items.pop() } else { None }
}

/// Depth first search over a pair list for the best routes between two currencies.
///
/// Every pair is used at most once per route and routes never exceed `max_hops` pairs. A pair that
/// cannot serve the swap because of its reserves ends that branch instead of failing the search.
pub struct BestTradeSearch<'a> {
    pairs: &'a [Pair],
    options: BestTradeOptions,
}

impl<'a> BestTradeSearch<'a> {
    pub fn new(pairs: &'a [Pair], options: BestTradeOptions) -> Result<Self, SdkError> {
        options.validate()?;
        if pairs.is_empty() {
            return Err(SdkError::EmptyPairs);
        }
        Ok(Self { pairs, options })
    }

    /// Best trades spending exactly `amount_in` for `currency_out`.
    pub fn exact_in(&self, amount_in: &CurrencyAmount, currency_out: &Currency) -> Result<Vec<Trade>, SdkError> {
        debug!(pairs = self.pairs.len(), options = ?self.options, amount_in = %amount_in, currency_out = %currency_out, "best trade exact in");
        let trades = self.explore_exact_in(amount_in, currency_out, &[], amount_in)?;
        debug!(results = trades.len(), "best trade exact in finished");
        Ok(trades)
    }

    /// Best trades receiving exactly `amount_out` paid in `currency_in`.
    pub fn exact_out(&self, currency_in: &Currency, amount_out: &CurrencyAmount) -> Result<Vec<Trade>, SdkError> {
        debug!(pairs = self.pairs.len(), options = ?self.options, currency_in = %currency_in, amount_out = %amount_out, "best trade exact out");
        let trades = self.explore_exact_out(currency_in, amount_out, &[], amount_out)?;
        debug!(results = trades.len(), "best trade exact out finished");
        Ok(trades)
    }

    fn route_pairs(&self, path: &[usize]) -> Vec<Pair> {
        path.iter().map(|&index| self.pairs[index].clone()).collect()
    }

    fn merge(&self, best: &mut Vec<Trade>, trades: Vec<Trade>) {
        for trade in trades {
            sorted_insert(best, trade, self.options.max_num_results, trade_comparator);
        }
    }

    // `path` holds indices of the pairs taken so far, in swap order. `frontier` is what the last pair
    // produced.
    fn explore_exact_in(
        &self,
        amount_in: &CurrencyAmount,
        currency_out: &Currency,
        path: &[usize],
        frontier: &CurrencyAmount,
    ) -> Result<Vec<Trade>, SdkError> {
        let mut best = Vec::new();
        let frontier_token = frontier.currency().wrapped();

        for (index, pair) in self.pairs.iter().enumerate() {
            if path.contains(&index) || !pair.involves_token(frontier_token) {
                continue;
            }

            let amount_out = match pair.get_output_amount(frontier) {
                Ok((amount_out, _)) => amount_out,
                Err(err) if err.is_insufficient_liquidity() => {
                    trace!(%pair, %err, "dead end");
                    continue;
                }
                Err(err) => return Err(err),
            };
            trace!(%pair, depth = path.len() + 1, amount_out = %amount_out, "hop");

            let next_path = [path, &[index][..]].concat();
            if amount_out.currency().wrapped() == currency_out.wrapped() {
                let route = Route::new(self.route_pairs(&next_path), amount_in.currency().clone(), Some(currency_out.clone()))?;
                sorted_insert(&mut best, Trade::exact_in(route, amount_in)?, self.options.max_num_results, trade_comparator);
            }

            if next_path.len() < self.options.max_hops {
                let deeper = self.explore_exact_in(amount_in, currency_out, &next_path, &amount_out)?;
                self.merge(&mut best, deeper);
            }
        }

        Ok(best)
    }

    // Walks backward from the output. `path` is in swap order, so new pairs are prepended.
    fn explore_exact_out(
        &self,
        currency_in: &Currency,
        amount_out: &CurrencyAmount,
        path: &[usize],
        frontier: &CurrencyAmount,
    ) -> Result<Vec<Trade>, SdkError> {
        let mut best = Vec::new();
        let frontier_token = frontier.currency().wrapped();

        for (index, pair) in self.pairs.iter().enumerate() {
            if path.contains(&index) || !pair.involves_token(frontier_token) {
                continue;
            }

            let amount_in = match pair.get_input_amount(frontier) {
                Ok((amount_in, _)) => amount_in,
                Err(err) if err.is_insufficient_liquidity() => {
                    trace!(%pair, %err, "dead end");
                    continue;
                }
                Err(err) => return Err(err),
            };
            trace!(%pair, depth = path.len() + 1, amount_in = %amount_in, "hop");

            let next_path = [&[index][..], path].concat();
            if amount_in.currency().wrapped() == currency_in.wrapped() {
                let route = Route::new(self.route_pairs(&next_path), currency_in.clone(), Some(amount_out.currency().clone()))?;
                sorted_insert(&mut best, Trade::exact_out(route, amount_out)?, self.options.max_num_results, trade_comparator);
            }

            if next_path.len() < self.options.max_hops {
                let deeper = self.explore_exact_out(currency_in, amount_out, &next_path, &amount_in)?;
                self.merge(&mut best, deeper);
            }
        }

        Ok(best)
    }
}

/// Best exact input trades from `amount_in` to `currency_out` over `pairs`, best first.
pub fn best_trade_exact_in(
    pairs: &[Pair],
    amount_in: &CurrencyAmount,
    currency_out: &Currency,
    options: Option<BestTradeOptions>,
) -> Result<Vec<Trade>, SdkError> {
    BestTradeSearch::new(pairs, options.unwrap_or_default())?.exact_in(amount_in, currency_out)
}

/// Best exact output trades from `currency_in` to `amount_out` over `pairs`, best first.
pub fn best_trade_exact_out(
    pairs: &[Pair],
    currency_in: &Currency,
    amount_out: &CurrencyAmount,
    options: Option<BestTradeOptions>,
) -> Result<Vec<Trade>, SdkError> {
    BestTradeSearch::new(pairs, options.unwrap_or_default())?.exact_out(currency_in, amount_out)
}
