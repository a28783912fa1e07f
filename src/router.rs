use crate::error::SdkError;
use crate::math::Percent;
use crate::trade::{Trade, TradeType};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, sol};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use strum_macros::{Display, EnumIter, EnumString, VariantNames};
use tracing::debug;

/// Seconds until a swap expires when no deadline is given.
pub const DEFAULT_DEADLINE_SECS: u64 = 300;

sol! {
    /// Swap entry points of the Uniswap V2 router
    interface IUniswapV2Router02 {
        function swapExactTokensForTokens(uint256 amountIn, uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
        function swapTokensForExactTokens(uint256 amountOut, uint256 amountInMax, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
        function swapExactETHForTokens(uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external payable returns (uint256[] memory amounts);
        function swapTokensForExactETH(uint256 amountOut, uint256 amountInMax, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
        function swapExactTokensForETH(uint256 amountIn, uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
        function swapETHForExactTokens(uint256 amountOut, address[] calldata path, address to, uint256 deadline) external payable returns (uint256[] memory amounts);

        function swapExactTokensForTokensSupportingFeeOnTransferTokens(uint256 amountIn, uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external;
        function swapExactETHForTokensSupportingFeeOnTransferTokens(uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external payable;
        function swapExactTokensForETHSupportingFeeOnTransferTokens(uint256 amountIn, uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external;
    }
}

/// Router method names, displayed exactly as the contract spells them.
#[derive(Copy, Clone, Debug, Display, PartialEq, Hash, Eq, EnumString, VariantNames, Deserialize, Serialize, EnumIter)]
pub enum SwapMethod {
    #[strum(serialize = "swapExactTokensForTokens")]
    #[serde(rename = "swapExactTokensForTokens")]
    SwapExactTokensForTokens,
    #[strum(serialize = "swapTokensForExactTokens")]
    #[serde(rename = "swapTokensForExactTokens")]
    SwapTokensForExactTokens,
    #[strum(serialize = "swapExactETHForTokens")]
    #[serde(rename = "swapExactETHForTokens")]
    SwapExactEthForTokens,
    #[strum(serialize = "swapTokensForExactETH")]
    #[serde(rename = "swapTokensForExactETH")]
    SwapTokensForExactEth,
    #[strum(serialize = "swapExactTokensForETH")]
    #[serde(rename = "swapExactTokensForETH")]
    SwapExactTokensForEth,
    #[strum(serialize = "swapETHForExactTokens")]
    #[serde(rename = "swapETHForExactTokens")]
    SwapEthForExactTokens,
    #[strum(serialize = "swapExactTokensForTokensSupportingFeeOnTransferTokens")]
    #[serde(rename = "swapExactTokensForTokensSupportingFeeOnTransferTokens")]
    SwapExactTokensForTokensSupportingFeeOnTransferTokens,
    #[strum(serialize = "swapExactETHForTokensSupportingFeeOnTransferTokens")]
    #[serde(rename = "swapExactETHForTokensSupportingFeeOnTransferTokens")]
    SwapExactEthForTokensSupportingFeeOnTransferTokens,
    #[strum(serialize = "swapExactTokensForETHSupportingFeeOnTransferTokens")]
    #[serde(rename = "swapExactTokensForETHSupportingFeeOnTransferTokens")]
    SwapExactTokensForEthSupportingFeeOnTransferTokens,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapArgument {
    Amount(U256),
    Path(Vec<Address>),
    Recipient(Address),
    Deadline(U256),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TradeOptions {
    /// Unfavorable price movement to tolerate, zero when `None`.
    pub allowed_slippage: Option<Percent>,
    pub recipient: Address,
    /// Unix timestamp after which the swap reverts. Defaults to now plus five minutes.
    pub deadline: Option<U256>,
    /// Some token on the path takes a fee on transfer. Only exact input trades support it.
    pub fee_on_transfer: bool,
}

impl TradeOptions {
    pub fn new(recipient: Address) -> Self {
        Self { allowed_slippage: None, recipient, deadline: None, fee_on_transfer: false }
    }

    pub fn with_slippage(mut self, allowed_slippage: Percent) -> Self {
        self.allowed_slippage = Some(allowed_slippage);
        self
    }

    pub fn with_deadline(mut self, deadline: U256) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_fee_on_transfer(mut self, fee_on_transfer: bool) -> Self {
        self.fee_on_transfer = fee_on_transfer;
        self
    }
}

/// A router call: method, ordered arguments and the wei to attach.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapParameters {
    pub method: SwapMethod,
    pub args: Vec<SwapArgument>,
    pub value: U256,
}

fn default_deadline() -> U256 {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_secs()).unwrap_or_default();
    U256::from(now + DEFAULT_DEADLINE_SECS)
}

/// Picks the router method and arguments that execute `trade` with the given protections.
pub fn swap_call_parameters(trade: &Trade, options: &TradeOptions) -> Result<SwapParameters, SdkError> {
    let ether_in = trade.input_amount().currency().is_native();
    let ether_out = trade.output_amount().currency().is_native();
    if ether_in && ether_out {
        return Err(SdkError::EtherInOut);
    }

    let slippage = options.allowed_slippage.clone().unwrap_or_else(Percent::zero);
    let amount_in = trade.maximum_amount_in(&slippage)?.to_u256()?;
    let amount_out = trade.minimum_amount_out(&slippage)?.to_u256()?;
    let path: Vec<Address> = trade.route().path().iter().map(|token| token.get_address()).collect();
    let to = SwapArgument::Recipient(options.recipient);
    let deadline = SwapArgument::Deadline(options.deadline.unwrap_or_else(default_deadline));
    let fot = options.fee_on_transfer;

    use SwapArgument::{Amount, Path};
    let (method, args, value) = match trade.trade_type() {
        TradeType::ExactInput => {
            if ether_in {
                let method = if fot { SwapMethod::SwapExactEthForTokensSupportingFeeOnTransferTokens } else { SwapMethod::SwapExactEthForTokens };
                (method, vec![Amount(amount_out), Path(path), to, deadline], amount_in)
            } else if ether_out {
                let method = if fot { SwapMethod::SwapExactTokensForEthSupportingFeeOnTransferTokens } else { SwapMethod::SwapExactTokensForEth };
                (method, vec![Amount(amount_in), Amount(amount_out), Path(path), to, deadline], U256::ZERO)
            } else {
                let method =
                    if fot { SwapMethod::SwapExactTokensForTokensSupportingFeeOnTransferTokens } else { SwapMethod::SwapExactTokensForTokens };
                (method, vec![Amount(amount_in), Amount(amount_out), Path(path), to, deadline], U256::ZERO)
            }
        }
        TradeType::ExactOutput => {
            if fot {
                return Err(SdkError::ExactOutFeeOnTransfer);
            }
            if ether_in {
                (SwapMethod::SwapEthForExactTokens, vec![Amount(amount_out), Path(path), to, deadline], amount_in)
            } else if ether_out {
                (SwapMethod::SwapTokensForExactEth, vec![Amount(amount_out), Amount(amount_in), Path(path), to, deadline], U256::ZERO)
            } else {
                (SwapMethod::SwapTokensForExactTokens, vec![Amount(amount_out), Amount(amount_in), Path(path), to, deadline], U256::ZERO)
            }
        }
    };

    debug!(%method, %value, "swap call parameters");
    Ok(SwapParameters { method, args, value })
}

/// Value and ABI encoded calldata for the router transaction.
pub fn swap_call_parameters_packed(trade: &Trade, options: &TradeOptions) -> Result<(U256, Bytes), SdkError> {
    let parameters = swap_call_parameters(trade, options)?;
    let calldata = parameters.calldata()?;
    Ok((parameters.value, calldata))
}

impl SwapParameters {
    /// ABI encodes the call against `IUniswapV2Router02`.
    pub fn calldata(&self) -> Result<Bytes, SdkError> {
        use IUniswapV2Router02 as Router;
        use SwapArgument::{Amount, Deadline, Path, Recipient};

        let encoded = match (self.method, self.args.as_slice()) {
            (SwapMethod::SwapExactTokensForTokens, [Amount(amount_in), Amount(min_out), Path(path), Recipient(to), Deadline(deadline)]) => {
                Router::swapExactTokensForTokensCall { amountIn: *amount_in, amountOutMin: *min_out, path: path.clone(), to: *to, deadline: *deadline }
                    .abi_encode()
            }
            (SwapMethod::SwapTokensForExactTokens, [Amount(amount_out), Amount(max_in), Path(path), Recipient(to), Deadline(deadline)]) => {
                Router::swapTokensForExactTokensCall { amountOut: *amount_out, amountInMax: *max_in, path: path.clone(), to: *to, deadline: *deadline }
                    .abi_encode()
            }
            (SwapMethod::SwapExactEthForTokens, [Amount(min_out), Path(path), Recipient(to), Deadline(deadline)]) => {
                Router::swapExactETHForTokensCall { amountOutMin: *min_out, path: path.clone(), to: *to, deadline: *deadline }.abi_encode()
            }
            (SwapMethod::SwapTokensForExactEth, [Amount(amount_out), Amount(max_in), Path(path), Recipient(to), Deadline(deadline)]) => {
                Router::swapTokensForExactETHCall { amountOut: *amount_out, amountInMax: *max_in, path: path.clone(), to: *to, deadline: *deadline }
                    .abi_encode()
            }
            (SwapMethod::SwapExactTokensForEth, [Amount(amount_in), Amount(min_out), Path(path), Recipient(to), Deadline(deadline)]) => {
                Router::swapExactTokensForETHCall { amountIn: *amount_in, amountOutMin: *min_out, path: path.clone(), to: *to, deadline: *deadline }
                    .abi_encode()
            }
            (SwapMethod::SwapEthForExactTokens, [Amount(amount_out), Path(path), Recipient(to), Deadline(deadline)]) => {
                Router::swapETHForExactTokensCall { amountOut: *amount_out, path: path.clone(), to: *to, deadline: *deadline }.abi_encode()
            }
            (
                SwapMethod::SwapExactTokensForTokensSupportingFeeOnTransferTokens,
                [Amount(amount_in), Amount(min_out), Path(path), Recipient(to), Deadline(deadline)],
            ) => Router::swapExactTokensForTokensSupportingFeeOnTransferTokensCall {
                amountIn: *amount_in,
                amountOutMin: *min_out,
                path: path.clone(),
                to: *to,
                deadline: *deadline,
            }
            .abi_encode(),
            (SwapMethod::SwapExactEthForTokensSupportingFeeOnTransferTokens, [Amount(min_out), Path(path), Recipient(to), Deadline(deadline)]) => {
                Router::swapExactETHForTokensSupportingFeeOnTransferTokensCall { amountOutMin: *min_out, path: path.clone(), to: *to, deadline: *deadline }
                    .abi_encode()
            }
            (
                SwapMethod::SwapExactTokensForEthSupportingFeeOnTransferTokens,
                [Amount(amount_in), Amount(min_out), Path(path), Recipient(to), Deadline(deadline)],
            ) => Router::swapExactTokensForETHSupportingFeeOnTransferTokensCall {
                amountIn: *amount_in,
                amountOutMin: *min_out,
                path: path.clone(),
                to: *to,
                deadline: *deadline,
            }
            .abi_encode(),
            (method, _) => return Err(SdkError::SwapArguments(method.to_string())),
        };

        Ok(Bytes::from(encoded))
    }
}
