use crate::best_trade::BestTradeOptions;
use crate::config_loader::{ConfigLoaderSync, LoadConfigError, load_from_file_sync};
use crate::error::SdkError;
use crate::math::Percent;
use crate::router::{DEFAULT_DEADLINE_SECS, TradeOptions};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top level document with optional `[search]` and `[router]` tables.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfigRoot {
    #[serde(default)]
    pub search: SearchConfigSection,
    #[serde(default)]
    pub router: RouterConfigSection,
}

impl RouteConfigRoot {
    pub fn load_from_file_sync(file_name: impl AsRef<Path>) -> Result<Self, LoadConfigError> {
        load_from_file_sync(file_name)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct SearchConfigSection {
    pub max_hops: usize,
    pub max_num_results: usize,
}

impl Default for SearchConfigSection {
    fn default() -> Self {
        let options = BestTradeOptions::default();
        Self { max_hops: options.max_hops, max_num_results: options.max_num_results }
    }
}

impl SearchConfigSection {
    pub fn with_max_hops(&self, max_hops: usize) -> Self {
        Self { max_hops, ..self.clone() }
    }

    /// Defaults overridden by `SWAP_ROUTE_MAX_HOPS` and `SWAP_ROUTE_MAX_RESULTS`.
    pub fn from_env() -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Ok(max_hops) = std::env::var("SWAP_ROUTE_MAX_HOPS") {
            config.max_hops = max_hops.parse().map_err(|e| eyre::eyre!("Invalid SWAP_ROUTE_MAX_HOPS: {}", e))?;
        }

        if let Ok(max_results) = std::env::var("SWAP_ROUTE_MAX_RESULTS") {
            config.max_num_results = max_results.parse().map_err(|e| eyre::eyre!("Invalid SWAP_ROUTE_MAX_RESULTS: {}", e))?;
        }

        Ok(config)
    }

    pub fn to_options(&self) -> Result<BestTradeOptions, SdkError> {
        BestTradeOptions::new(self.max_num_results, self.max_hops)
    }
}

impl ConfigLoaderSync for SearchConfigSection {
    type SectionType = SearchConfigSection;

    fn load_section_from_file_sync(file_name: impl AsRef<Path>) -> Result<Self::SectionType, LoadConfigError> {
        let root: RouteConfigRoot = load_from_file_sync(file_name)?;
        Ok(root.search)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct RouterConfigSection {
    /// Seconds from now until the swap expires.
    pub deadline_secs: u64,
    pub allowed_slippage_bps: u32,
    pub fee_on_transfer: bool,
}

impl Default for RouterConfigSection {
    fn default() -> Self {
        Self { deadline_secs: DEFAULT_DEADLINE_SECS, allowed_slippage_bps: 0, fee_on_transfer: false }
    }
}

impl RouterConfigSection {
    /// Router options for `recipient`, with the deadline counted from `now_secs`.
    pub fn trade_options(&self, recipient: Address, now_secs: u64) -> TradeOptions {
        TradeOptions::new(recipient)
            .with_slippage(Percent::from_bps(self.allowed_slippage_bps))
            .with_deadline(U256::from(now_secs.saturating_add(self.deadline_secs)))
            .with_fee_on_transfer(self.fee_on_transfer)
    }
}

impl ConfigLoaderSync for RouterConfigSection {
    type SectionType = RouterConfigSection;

    fn load_section_from_file_sync(file_name: impl AsRef<Path>) -> Result<Self::SectionType, LoadConfigError> {
        let root: RouteConfigRoot = load_from_file_sync(file_name)?;
        Ok(root.router)
    }
}
