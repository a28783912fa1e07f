use alloy_primitives::{Address, B256, address, b256};

/// Uniswap V2 factory on Ethereum mainnet and the public testnets.
pub const FACTORY_ADDRESS: Address = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

/// keccak256 of the pair contract creation code, used as the CREATE2 init code hash.
pub const INIT_CODE_HASH: B256 = b256!("0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

/// Liquidity permanently locked by the first mint.
pub const MINIMUM_LIQUIDITY: u64 = 1000;

// 0.3% swap fee expressed as 997/1000
pub const FEE_NUMERATOR: u64 = 997;
pub const FEE_DENOMINATOR: u64 = 1000;

/// Decimals of the native asset and of every pair's liquidity token.
pub const NATIVE_DECIMALS: u8 = 18;

pub const LIQUIDITY_TOKEN_SYMBOL: &str = "UNI-V2";
pub const LIQUIDITY_TOKEN_NAME: &str = "Uniswap V2";

#[non_exhaustive]
pub struct ChainId;

impl ChainId {
    pub const MAINNET: u64 = 1;
    pub const ROPSTEN: u64 = 3;
    pub const RINKEBY: u64 = 4;
    pub const GOERLI: u64 = 5;
    pub const KOVAN: u64 = 42;
}

#[non_exhaustive]
pub struct Weth9Address;

impl Weth9Address {
    pub const MAINNET: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    pub const ROPSTEN: Address = address!("0xc778417E063141139Fce010982780140Aa0cD5Ab");
    pub const RINKEBY: Address = address!("0xc778417E063141139Fce010982780140Aa0cD5Ab");
    pub const GOERLI: Address = address!("0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6");
    pub const KOVAN: Address = address!("0xd0A1E359811322d97991E03f863a0C30C2cF029C");
}

/// Canonical wrapped native token for a chain, if this crate knows it.
pub fn weth9_address(chain_id: u64) -> Option<Address> {
    match chain_id {
        ChainId::MAINNET => Some(Weth9Address::MAINNET),
        ChainId::ROPSTEN => Some(Weth9Address::ROPSTEN),
        ChainId::RINKEBY => Some(Weth9Address::RINKEBY),
        ChainId::GOERLI => Some(Weth9Address::GOERLI),
        ChainId::KOVAN => Some(Weth9Address::KOVAN),
        _ => None,
    }
}
