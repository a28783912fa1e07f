use crate::error::SdkError;
use crate::pair::Pair;
use crate::price::Price;
use crate::route_hash::{RouteHash, generate_route_hash};
use crate::token::{Currency, Token};
use std::fmt::{Debug, Display, Formatter};

/// A chain of pairs from `input` to `output`. The path holds the wrapped token at every hop.
#[derive(Clone, PartialEq, Eq)]
pub struct Route {
    pairs: Vec<Pair>,
    path: Vec<Token>,
    input: Currency,
    output: Currency,
    mid_price: Price,
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let path = self.path.iter().map(|token| token.to_string()).collect::<Vec<_>>();
        write!(f, "{}", path.join(" -> "))
    }
}

impl Debug for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route({} via {:?})", self, self.pairs)
    }
}

impl Route {
    /// Builds a route through `pairs`. When `output` is `None` it is the last token of the path.
    pub fn new(pairs: Vec<Pair>, input: impl Into<Currency>, output: Option<Currency>) -> Result<Self, SdkError> {
        let input = input.into();
        let (first, last) = match (pairs.first(), pairs.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(SdkError::EmptyPairs),
        };

        let chain_id = first.chain_id();
        if pairs.iter().any(|pair| pair.chain_id() != chain_id) {
            return Err(SdkError::ChainMismatch);
        }
        if !first.involves_token(input.wrapped()) {
            return Err(SdkError::InvalidInput);
        }
        if let Some(output) = &output {
            if !last.involves_token(output.wrapped()) {
                return Err(SdkError::InvalidOutput);
            }
        }

        let mut path = Vec::with_capacity(pairs.len() + 1);
        path.push(input.wrapped().clone());
        for pair in &pairs {
            let current = &path[path.len() - 1];
            let next = pair.other_token(current).map_err(|_| SdkError::InvalidPath)?.clone();
            path.push(next);
        }

        let output = match output {
            Some(output) => output,
            None => Currency::Token(path[path.len() - 1].clone()),
        };
        let mid_price = compose_mid_price(&pairs, &path, &input, &output)?;

        Ok(Self { pairs, path, input, output, mid_price })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn path(&self) -> &[Token] {
        &self.path
    }

    pub fn input(&self) -> &Currency {
        &self.input
    }

    pub fn output(&self) -> &Currency {
        &self.output
    }

    /// Price of one unit of `input` in `output` at current reserves, before any trade.
    pub fn mid_price(&self) -> &Price {
        &self.mid_price
    }

    pub fn chain_id(&self) -> u64 {
        self.pairs[0].chain_id()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn route_hash(&self) -> RouteHash {
        generate_route_hash(&self.path, &self.pairs)
    }
}

// Multiplies every pair's spot price oriented along the path.
fn compose_mid_price(pairs: &[Pair], path: &[Token], input: &Currency, output: &Currency) -> Result<Price, SdkError> {
    let mut prices = pairs.iter().zip(path).map(|(pair, token)| pair.price_of(token));
    let mut price = prices.next().ok_or(SdkError::EmptyPairs)??;
    for next in prices {
        price = price.multiply(&next?)?;
    }

    // report in the route's own currencies so native endpoints survive
    let raw = price.raw();
    Ok(Price::new(input.clone(), output.clone(), raw.denominator().clone(), raw.numerator().clone()))
}
