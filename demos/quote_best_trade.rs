//! Finds the best routes for a small set of pairs and prints the router call for the winner.
//!
//! Run with `cargo run --example quote_best_trade`. Reads optional settings from `swap_route.toml`.

use alloy_primitives::Address;
use eyre::Result;
use std::time::{SystemTime, UNIX_EPOCH};
use swap_route::{
    BestTradeSearch, Currency, CurrencyAmount, Pair, RouteConfigRoot, SearchConfigSection, Token, best_trade_exact_out,
    swap_call_parameters,
};
use tracing::info;

fn pair(token_a: &Token, reserve_a: u64, token_b: &Token, reserve_b: u64) -> Result<Pair> {
    Ok(Pair::new(CurrencyAmount::from_raw_amount(token_a.clone(), reserve_a), CurrencyAmount::from_raw_amount(token_b.clone(), reserve_b), None)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match RouteConfigRoot::load_from_file_sync("swap_route.toml") {
        Ok(config) => config,
        Err(e) => {
            info!("Using default config: {}", e);
            RouteConfigRoot { search: SearchConfigSection::from_env()?, ..RouteConfigRoot::default() }
        }
    };

    let ether = Currency::ether(1)?;
    let weth = ether.wrapped().clone();
    let usdc = Token::new_with_data(1, Address::repeat_byte(0xaa), 6, Some("USDC".to_string()), Some("USD Coin".to_string()));
    let dai = Token::new_with_data(1, Address::repeat_byte(0xbb), 18, Some("DAI".to_string()), Some("Dai Stablecoin".to_string()));

    let pairs = vec![
        pair(&weth, 1_000_000_000, &usdc, 2_500_000_000)?,
        pair(&weth, 500_000_000, &dai, 1_300_000_000)?,
        pair(&dai, 4_000_000_000, &usdc, 4_000_000_000)?,
    ];
    for pair in &pairs {
        info!("Pair {} at {}", pair, pair.get_address());
    }

    let search = BestTradeSearch::new(&pairs, config.search.to_options()?)?;
    let amount_in = CurrencyAmount::from_raw_amount(ether.clone(), 10_000_000u64);
    let trades = search.exact_in(&amount_in, &Currency::Token(usdc.clone()))?;
    for trade in &trades {
        info!(route = %trade.route(), hash = %trade.route().route_hash(), impact = %trade.price_impact(), "Exact in {} -> {}", trade.input_amount(), trade.output_amount());
    }

    let amount_out = CurrencyAmount::from_raw_amount(usdc.clone(), 1_000_000u64);
    for trade in best_trade_exact_out(&pairs, &ether, &amount_out, Some(config.search.to_options()?))? {
        info!(route = %trade.route(), "Exact out {} -> {}", trade.input_amount(), trade.output_amount());
    }

    let Some(best) = trades.first() else {
        info!("No route from {} to {}", ether, usdc);
        return Ok(());
    };

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let options = config.router.trade_options(Address::repeat_byte(0x42), now);
    let params = swap_call_parameters(best, &options)?;
    info!(method = %params.method, value = %params.value, "Router call with {} arguments", params.args.len());
    info!("Calldata {}", params.calldata()?);

    Ok(())
}
