use crate::constants::{NATIVE_DECIMALS, weth9_address};
use crate::error::SdkError;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_symbol())
    }
}

impl Token {
    pub fn new(chain_id: u64, address: Address, decimals: u8) -> Token {
        Token { chain_id, address, decimals, symbol: None, name: None }
    }

    pub fn new_with_data(chain_id: u64, address: Address, decimals: u8, symbol: Option<String>, name: Option<String>) -> Token {
        Token { chain_id, address, decimals, symbol, name }
    }

    // For testing purposes
    pub fn repeat_byte(chain_id: u64, byte: u8) -> Token {
        Token::new(chain_id, Address::repeat_byte(byte), 18)
    }

    pub fn get_chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    pub fn get_decimals(&self) -> u8 {
        self.decimals
    }

    pub fn get_symbol(&self) -> String {
        self.symbol.clone().unwrap_or(self.address.to_string())
    }

    pub fn get_name(&self) -> String {
        self.name.clone().unwrap_or(self.address.to_string())
    }

    /// Canonical pair ordering: the token with the lower address is token0.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, SdkError> {
        if self.chain_id != other.chain_id {
            return Err(SdkError::DifferentChain);
        }
        match self.address.cmp(&other.address) {
            Ordering::Less => Ok(true),
            Ordering::Greater => Ok(false),
            Ordering::Equal => Err(SdkError::IdenticalAddresses),
        }
    }
}

/// The chain's native asset. It never appears in a pair directly, only through `wrapped`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NativeCurrency {
    chain_id: u64,
    decimals: u8,
    symbol: String,
    name: String,
    wrapped: Token,
}

impl PartialEq for NativeCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for NativeCurrency {}

impl Hash for NativeCurrency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state)
    }
}

impl NativeCurrency {
    pub fn new(wrapped: Token, symbol: &str, name: &str) -> Self {
        Self { chain_id: wrapped.get_chain_id(), decimals: wrapped.get_decimals(), symbol: symbol.to_string(), name: name.to_string(), wrapped }
    }

    /// Ether with its WETH9 wrapper on one of the known chains.
    pub fn ether(chain_id: u64) -> Result<Self, SdkError> {
        let address = weth9_address(chain_id).ok_or(SdkError::UnsupportedChain(chain_id))?;
        let weth = Token::new_with_data(chain_id, address, NATIVE_DECIMALS, Some("WETH".to_string()), Some("Wrapped Ether".to_string()));
        Ok(Self::new(weth, "ETH", "Ether"))
    }

    pub fn get_chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn get_decimals(&self) -> u8 {
        self.decimals
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn wrapped(&self) -> &Token {
        &self.wrapped
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Native(native) => write!(f, "{}", native.get_symbol()),
            Currency::Token(token) => write!(f, "{}", token),
        }
    }
}

impl Currency {
    pub fn ether(chain_id: u64) -> Result<Self, SdkError> {
        NativeCurrency::ether(chain_id).map(Currency::Native)
    }

    /// The token used for pathing and address derivation.
    pub fn wrapped(&self) -> &Token {
        match self {
            Currency::Native(native) => native.wrapped(),
            Currency::Token(token) => token,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.get_chain_id(),
            Currency::Token(token) => token.get_chain_id(),
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native(native) => native.get_decimals(),
            Currency::Token(token) => token.get_decimals(),
        }
    }
}
