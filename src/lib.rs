pub mod constants;
pub mod error;
pub mod math;
pub mod token;

mod amount;
mod price;

pub mod pair;
pub mod route;
pub mod route_hash;
pub mod trade;

pub mod best_trade;
pub mod router;

pub mod config;
pub mod config_loader;

#[cfg(test)]
mod fixtures;

pub use amount::CurrencyAmount;
pub use best_trade::{BestTradeOptions, BestTradeSearch, best_trade_exact_in, best_trade_exact_out, sorted_insert};
pub use config::{RouteConfigRoot, RouterConfigSection, SearchConfigSection};
pub use config_loader::{ConfigLoaderSync, LoadConfigError};
pub use constants::{ChainId, FACTORY_ADDRESS, INIT_CODE_HASH, MINIMUM_LIQUIDITY};
pub use error::SdkError;
pub use math::{Fraction, Percent};
pub use pair::{Pair, PairOptions, compute_pair_address};
pub use price::Price;
pub use route::Route;
pub use route_hash::{RouteHash, generate_route_hash};
pub use router::{SwapArgument, SwapMethod, SwapParameters, TradeOptions, swap_call_parameters, swap_call_parameters_packed};
pub use token::{Currency, NativeCurrency, Token};
pub use trade::{Trade, TradeType, trade_comparator};
