#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    // Token and currency identity
    #[error("tokens belong to different chains")]
    DifferentChain,
    #[error("tokens have identical addresses")]
    IdenticalAddresses,
    #[error("token is not part of the pair")]
    TokenMismatch,
    #[error("currency does not match")]
    CurrencyMismatch,
    #[error("no wrapped native token known for chain {0}")]
    UnsupportedChain(u64),

    // Liquidity
    #[error("pair has insufficient reserves")]
    InsufficientReserves,
    #[error("input amount is insufficient")]
    InsufficientInputAmount,
    #[error("liquidity exceeds total supply")]
    InvalidLiquidity,
    #[error("kLast is required when the protocol fee is on")]
    InvalidKLast,

    // Route construction
    #[error("route requires at least one pair")]
    EmptyPairs,
    #[error("route pairs span multiple chains")]
    ChainMismatch,
    #[error("first pair does not involve the input currency")]
    InvalidInput,
    #[error("last pair does not involve the output currency")]
    InvalidOutput,
    #[error("pairs do not form a continuous path")]
    InvalidPath,

    // Trade and search
    #[error("slippage tolerance must not be negative")]
    InvalidSlippageTolerance,
    #[error("invalid option: {0}")]
    InvalidOption(&'static str),

    // Router
    #[error("the router does not support both ether in and out")]
    EtherInOut,
    #[error("fee on transfer is not supported for exact output trades")]
    ExactOutFeeOnTransfer,
    #[error("amount does not fit into uint256")]
    Overflow,
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("arguments do not fit router method {0}")]
    SwapArguments(String),
}

impl SdkError {
    /// Errors that only mean a single swap cannot be served by the pair's current reserves.
    pub fn is_insufficient_liquidity(&self) -> bool {
        matches!(self, SdkError::InsufficientReserves | SdkError::InsufficientInputAmount)
    }
}
