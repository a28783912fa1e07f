use crate::amount::CurrencyAmount;
use crate::constants::{FACTORY_ADDRESS, FEE_DENOMINATOR, FEE_NUMERATOR, INIT_CODE_HASH, LIQUIDITY_TOKEN_NAME, LIQUIDITY_TOKEN_SYMBOL, MINIMUM_LIQUIDITY};
use crate::error::SdkError;
use crate::math::u256_to_bigint;
use crate::price::Price;
use crate::token::{Currency, Token};
use alloy_primitives::{Address, B256, U256, keccak256};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt::{Debug, Display, Formatter};

/// CREATE2 address of the pair contract for two tokens. Argument order does not matter.
pub fn compute_pair_address(factory: Address, init_code_hash: B256, token_a: &Token, token_b: &Token) -> Result<Address, SdkError> {
    let (token0, token1) = if token_a.sorts_before(token_b)? { (token_a, token_b) } else { (token_b, token_a) };
    let salt = keccak256([token0.get_address().as_slice(), token1.get_address().as_slice()].concat());
    Ok(factory.create2(salt.0, init_code_hash.0))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairOptions {
    pub factory: Address,
    pub init_code_hash: B256,
    // skips the CREATE2 derivation when already known
    pub address: Option<Address>,
}

impl Default for PairOptions {
    fn default() -> Self {
        Self { factory: FACTORY_ADDRESS, init_code_hash: INIT_CODE_HASH, address: None }
    }
}

/// A constant product pool. Reserves are always sorted so that `token0` sorts before `token1`.
#[derive(Clone, PartialEq, Eq)]
pub struct Pair {
    liquidity_token: Token,
    token_amounts: [CurrencyAmount; 2],
    address: Address,
    options: PairOptions,
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({}/{})@{:#}", self.token0(), self.token1(), self.address)
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pair({}={}, {}={})@{:#}",
            self.token0(),
            self.reserve0().quotient(),
            self.token1(),
            self.reserve1().quotient(),
            self.address
        )
    }
}

fn sort_amounts(amount_a: CurrencyAmount, amount_b: CurrencyAmount) -> Result<[CurrencyAmount; 2], SdkError> {
    let amount_a = amount_a.wrapped();
    let amount_b = amount_b.wrapped();
    if amount_a.currency().wrapped().sorts_before(amount_b.currency().wrapped())? { Ok([amount_a, amount_b]) } else { Ok([amount_b, amount_a]) }
}

impl Pair {
    pub fn new(amount_a: CurrencyAmount, amount_b: CurrencyAmount, options: Option<PairOptions>) -> Result<Self, SdkError> {
        let token_amounts = sort_amounts(amount_a, amount_b)?;
        if token_amounts.iter().any(CurrencyAmount::is_negative) {
            return Err(SdkError::NegativeAmount);
        }
        let options = options.unwrap_or_default();
        let address = match options.address {
            Some(address) => address,
            None => compute_pair_address(
                options.factory,
                options.init_code_hash,
                token_amounts[0].currency().wrapped(),
                token_amounts[1].currency().wrapped(),
            )?,
        };
        let liquidity_token = Token::new_with_data(
            token_amounts[0].currency().chain_id(),
            address,
            18,
            Some(LIQUIDITY_TOKEN_SYMBOL.to_string()),
            Some(LIQUIDITY_TOKEN_NAME.to_string()),
        );

        Ok(Self { liquidity_token, token_amounts, address, options })
    }

    // Same pool with different reserves, keeping the already derived identity.
    fn with_reserves(&self, amount_a: CurrencyAmount, amount_b: CurrencyAmount) -> Result<Self, SdkError> {
        Ok(Self {
            liquidity_token: self.liquidity_token.clone(),
            token_amounts: sort_amounts(amount_a, amount_b)?,
            address: self.address,
            options: self.options.clone(),
        })
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    pub fn get_options(&self) -> &PairOptions {
        &self.options
    }

    pub fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    pub fn chain_id(&self) -> u64 {
        self.token0().get_chain_id()
    }

    pub fn token0(&self) -> &Token {
        self.token_amounts[0].currency().wrapped()
    }

    pub fn token1(&self) -> &Token {
        self.token_amounts[1].currency().wrapped()
    }

    pub fn reserve0(&self) -> &CurrencyAmount {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &CurrencyAmount {
        &self.token_amounts[1]
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&CurrencyAmount, SdkError> {
        if token == self.token0() {
            Ok(self.reserve0())
        } else if token == self.token1() {
            Ok(self.reserve1())
        } else {
            Err(SdkError::TokenMismatch)
        }
    }

    /// The token on the other side of `token`.
    pub fn other_token(&self, token: &Token) -> Result<&Token, SdkError> {
        if token == self.token0() {
            Ok(self.token1())
        } else if token == self.token1() {
            Ok(self.token0())
        } else {
            Err(SdkError::TokenMismatch)
        }
    }

    /// Mid price of token0 in terms of token1, i.e. reserve1 / reserve0.
    pub fn token0_price(&self) -> Price {
        Price::new(
            Currency::Token(self.token0().clone()),
            Currency::Token(self.token1().clone()),
            self.reserve0().quotient(),
            self.reserve1().quotient(),
        )
    }

    /// Mid price of token1 in terms of token0, i.e. reserve0 / reserve1.
    pub fn token1_price(&self) -> Price {
        Price::new(
            Currency::Token(self.token1().clone()),
            Currency::Token(self.token0().clone()),
            self.reserve1().quotient(),
            self.reserve0().quotient(),
        )
    }

    pub fn price_of(&self, token: &Token) -> Result<Price, SdkError> {
        if token == self.token0() {
            Ok(self.token0_price())
        } else if token == self.token1() {
            Ok(self.token1_price())
        } else {
            Err(SdkError::TokenMismatch)
        }
    }

    fn has_empty_reserve(&self) -> bool {
        self.reserve0().quotient().is_zero() || self.reserve1().quotient().is_zero()
    }

    /// Amount received for selling `input_amount`, and the pair after the swap.
    pub fn get_output_amount(&self, input_amount: &CurrencyAmount) -> Result<(CurrencyAmount, Pair), SdkError> {
        let input_amount = input_amount.wrapped();
        let input_token = input_amount.currency().wrapped();
        if !self.involves_token(input_token) {
            return Err(SdkError::TokenMismatch);
        }
        if input_amount.is_negative() {
            return Err(SdkError::NegativeAmount);
        }
        if self.has_empty_reserve() {
            return Err(SdkError::InsufficientReserves);
        }

        let input_reserve = self.reserve_of(input_token)?;
        let output_token = self.other_token(input_token)?;
        let output_reserve = self.reserve_of(output_token)?;

        let input_amount_with_fee = input_amount.quotient() * FEE_NUMERATOR;
        let numerator = &input_amount_with_fee * output_reserve.quotient();
        let denominator = input_reserve.quotient() * FEE_DENOMINATOR + &input_amount_with_fee;
        let output_amount = CurrencyAmount::from_raw_amount(output_token.clone(), numerator.div_floor(&denominator));
        if !output_amount.quotient().is_positive() {
            return Err(SdkError::InsufficientInputAmount);
        }

        let next_pair = self.with_reserves(input_reserve.add(&input_amount)?, output_reserve.subtract(&output_amount)?)?;
        Ok((output_amount, next_pair))
    }

    /// Amount that must be sold to receive exactly `output_amount`, and the pair after the swap.
    pub fn get_input_amount(&self, output_amount: &CurrencyAmount) -> Result<(CurrencyAmount, Pair), SdkError> {
        let output_amount = output_amount.wrapped();
        let output_token = output_amount.currency().wrapped();
        if !self.involves_token(output_token) {
            return Err(SdkError::TokenMismatch);
        }
        if output_amount.is_negative() {
            return Err(SdkError::NegativeAmount);
        }

        let output_reserve = self.reserve_of(output_token)?;
        if self.has_empty_reserve() || output_amount.quotient() >= output_reserve.quotient() {
            return Err(SdkError::InsufficientReserves);
        }

        let input_token = self.other_token(output_token)?;
        let input_reserve = self.reserve_of(input_token)?;

        let numerator = input_reserve.quotient() * output_amount.quotient() * FEE_DENOMINATOR;
        let denominator = (output_reserve.quotient() - output_amount.quotient()) * FEE_NUMERATOR;
        // +1 rounds up so the requested output is always covered
        let input_amount = CurrencyAmount::from_raw_amount(input_token.clone(), numerator.div_floor(&denominator) + BigInt::one());

        let next_pair = self.with_reserves(input_reserve.add(&input_amount)?, output_reserve.subtract(&output_amount)?)?;
        Ok((input_amount, next_pair))
    }

    /// Liquidity tokens minted for depositing `amount_a` and `amount_b` at the given total supply.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &CurrencyAmount,
        amount_a: &CurrencyAmount,
        amount_b: &CurrencyAmount,
    ) -> Result<CurrencyAmount, SdkError> {
        if total_supply.currency().wrapped() != &self.liquidity_token {
            return Err(SdkError::TokenMismatch);
        }
        // two amounts of one token cannot be sorted and never match the pair
        let [amount0, amount1] = sort_amounts(amount_a.clone(), amount_b.clone()).map_err(|_| SdkError::TokenMismatch)?;
        if amount0.currency().wrapped() != self.token0() || amount1.currency().wrapped() != self.token1() {
            return Err(SdkError::TokenMismatch);
        }
        if total_supply.is_negative() || amount0.is_negative() || amount1.is_negative() {
            return Err(SdkError::NegativeAmount);
        }

        let supply = total_supply.quotient();
        let liquidity = if supply.is_zero() {
            (amount0.quotient() * amount1.quotient()).sqrt() - BigInt::from(MINIMUM_LIQUIDITY)
        } else {
            if self.has_empty_reserve() {
                return Err(SdkError::InsufficientReserves);
            }
            let liquidity0 = (amount0.quotient() * &supply).div_floor(&self.reserve0().quotient());
            let liquidity1 = (amount1.quotient() * &supply).div_floor(&self.reserve1().quotient());
            liquidity0.min(liquidity1)
        };

        if !liquidity.is_positive() {
            return Err(SdkError::InsufficientInputAmount);
        }
        Ok(CurrencyAmount::from_raw_amount(self.liquidity_token.clone(), liquidity))
    }

    /// Amount of `token` redeemable for `liquidity`, accounting for the protocol fee when `fee_on`.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &CurrencyAmount,
        liquidity: &CurrencyAmount,
        fee_on: bool,
        k_last: Option<U256>,
    ) -> Result<CurrencyAmount, SdkError> {
        if !self.involves_token(token)
            || total_supply.currency().wrapped() != &self.liquidity_token
            || liquidity.currency().wrapped() != &self.liquidity_token
        {
            return Err(SdkError::TokenMismatch);
        }
        if total_supply.is_negative() || liquidity.is_negative() {
            return Err(SdkError::NegativeAmount);
        }
        if liquidity.quotient() > total_supply.quotient() {
            return Err(SdkError::InvalidLiquidity);
        }

        let adjusted_supply = self.adjust_total_supply(total_supply, fee_on, k_last)?.quotient();
        if adjusted_supply.is_zero() {
            return Err(SdkError::InvalidLiquidity);
        }
        let reserve = self.reserve_of(token)?;
        let amount = (liquidity.quotient() * reserve.quotient()).div_floor(&adjusted_supply);
        Ok(CurrencyAmount::from_raw_amount(token.clone(), amount))
    }

    // Mints the 1/6th share of sqrt(k) growth owed to the fee recipient since kLast.
    fn adjust_total_supply(&self, total_supply: &CurrencyAmount, fee_on: bool, k_last: Option<U256>) -> Result<CurrencyAmount, SdkError> {
        if !fee_on {
            return Ok(total_supply.clone());
        }
        let k_last = k_last.ok_or(SdkError::InvalidKLast)?;
        if k_last.is_zero() {
            return Ok(total_supply.clone());
        }

        let root_k = (self.reserve0().quotient() * self.reserve1().quotient()).sqrt();
        let root_k_last = u256_to_bigint(k_last).sqrt();
        if root_k <= root_k_last {
            return Ok(total_supply.clone());
        }

        let numerator = total_supply.quotient() * (&root_k - &root_k_last);
        let denominator = root_k * 5u32 + root_k_last;
        let fee_liquidity = CurrencyAmount::from_fractional_amount(self.liquidity_token.clone(), numerator, denominator);
        total_supply.add(&fee_liquidity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Fraction;
    use alloy_primitives::{address, b256};

    fn usdc() -> Token {
        Token::new_with_data(1, address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), 18, Some("USDC".to_string()), None)
    }

    fn dai() -> Token {
        Token::new_with_data(1, address!("0x6B175474E89094C44Da98b954EedeAC495271d0F"), 18, Some("DAI".to_string()), None)
    }

    fn amount(token: &Token, raw: u64) -> CurrencyAmount {
        CurrencyAmount::from_raw_amount(token.clone(), raw)
    }

    fn pair(a: (&Token, u64), b: (&Token, u64)) -> Pair {
        Pair::new(amount(a.0, a.1), amount(b.0, b.1), None).unwrap()
    }

    #[test]
    fn test_compute_pair_address() -> eyre::Result<()> {
        let factory = address!("0x1111111111111111111111111111111111111111");
        let expected = address!("0xb50b5182D6a47EC53a469395AF44e371d7C76ed4");

        assert_eq!(compute_pair_address(factory, INIT_CODE_HASH, &usdc(), &dai())?, expected);
        assert_eq!(compute_pair_address(factory, INIT_CODE_HASH, &dai(), &usdc())?, expected);
        assert_eq!(
            compute_pair_address(FACTORY_ADDRESS, INIT_CODE_HASH, &dai(), &usdc())?,
            address!("0xAE461cA67B15dc8dc81CE7615e0320dA1A9aB8D5")
        );
        Ok(())
    }

    #[test]
    fn test_address_is_order_insensitive() -> eyre::Result<()> {
        let hash = b256!("0x0101010101010101010101010101010101010101010101010101010101010101");
        for byte in 1..20u8 {
            let a = Token::repeat_byte(1, byte);
            let b = Token::repeat_byte(1, byte + 100);
            assert_eq!(compute_pair_address(FACTORY_ADDRESS, hash, &a, &b)?, compute_pair_address(FACTORY_ADDRESS, hash, &b, &a)?);
        }
        Ok(())
    }

    #[test]
    fn test_cannot_mix_chains() {
        let weth_ropsten = Token::new(3, address!("0xc778417E063141139Fce010982780140Aa0cD5Ab"), 18);
        let result = Pair::new(amount(&usdc(), 100), amount(&weth_ropsten, 100), None);
        assert!(matches!(result, Err(SdkError::DifferentChain)));
    }

    #[test]
    fn test_precomputed_address_is_used() -> eyre::Result<()> {
        let known = Address::repeat_byte(0x42);
        let options = PairOptions { address: Some(known), ..PairOptions::default() };
        let p = Pair::new(amount(&usdc(), 100), amount(&dai(), 100), Some(options))?;

        assert_eq!(p.get_address(), known);
        assert_eq!(p.liquidity_token().get_address(), known);
        Ok(())
    }

    #[test]
    fn test_tokens_are_sorted() {
        let pair_a = pair((&usdc(), 100), (&dai(), 101));
        let pair_b = pair((&dai(), 101), (&usdc(), 100));

        for p in [&pair_a, &pair_b] {
            assert_eq!(p.token0(), &dai());
            assert_eq!(p.token1(), &usdc());
            assert_eq!(p.reserve0(), &amount(&dai(), 101));
            assert_eq!(p.reserve1(), &amount(&usdc(), 100));
            assert_eq!(p.chain_id(), 1);
        }
        assert_eq!(pair_a.get_address(), pair_b.get_address());
    }

    #[test]
    fn test_prices() -> eyre::Result<()> {
        let pair_a = pair((&usdc(), 101), (&dai(), 100));
        let pair_b = pair((&dai(), 100), (&usdc(), 101));

        for p in [&pair_a, &pair_b] {
            assert_eq!(p.token0_price().raw(), &Fraction::new(101, 100));
            assert_eq!(p.token1_price().raw(), &Fraction::new(100, 101));
            assert_eq!(p.token0_price().raw(), &p.token1_price().raw().invert());
            assert_eq!(p.price_of(&dai())?, p.token0_price());
            assert_eq!(p.price_of(&usdc())?, p.token1_price());
        }

        let weth = Token::new(1, address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"), 18);
        assert!(matches!(pair_a.price_of(&weth), Err(SdkError::TokenMismatch)));
        Ok(())
    }

    #[test]
    fn test_reserve_of_and_involves_token() -> eyre::Result<()> {
        let p = pair((&usdc(), 100), (&dai(), 101));
        let weth = Token::new(1, address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"), 18);

        assert_eq!(p.reserve_of(&usdc())?, &amount(&usdc(), 100));
        assert_eq!(p.reserve_of(&dai())?, &amount(&dai(), 101));
        assert!(matches!(p.reserve_of(&weth), Err(SdkError::TokenMismatch)));

        assert!(p.involves_token(&usdc()));
        assert!(p.involves_token(&dai()));
        assert!(!p.involves_token(&weth));
        Ok(())
    }

    #[test]
    fn test_get_output_amount() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(1, 1);
        let t1 = Token::repeat_byte(1, 2);
        let p = pair((&t0, 1000), (&t1, 1000));

        let (output, next) = p.get_output_amount(&amount(&t0, 100))?;
        // 100 * 997 * 1000 / (1000 * 1000 + 100 * 997)
        assert_eq!(output, amount(&t1, 90));
        assert_eq!(next.reserve0(), &amount(&t0, 1100));
        assert_eq!(next.reserve1(), &amount(&t1, 910));
        assert_eq!(next.get_address(), p.get_address());
        // the original is untouched
        assert_eq!(p.reserve0(), &amount(&t0, 1000));
        Ok(())
    }

    #[test]
    fn test_get_output_amount_errors() {
        let t0 = Token::repeat_byte(1, 1);
        let t1 = Token::repeat_byte(1, 2);
        let t2 = Token::repeat_byte(1, 3);

        let empty = pair((&t0, 0), (&t1, 0));
        assert!(matches!(empty.get_output_amount(&amount(&t0, 100)), Err(SdkError::InsufficientReserves)));

        let p = pair((&t0, 1000), (&t1, 1000));
        assert!(matches!(p.get_output_amount(&amount(&t0, 1)), Err(SdkError::InsufficientInputAmount)));
        assert!(matches!(p.get_output_amount(&amount(&t2, 100)), Err(SdkError::TokenMismatch)));
    }

    #[test]
    fn test_get_input_amount() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(1, 1);
        let t1 = Token::repeat_byte(1, 2);
        let p = pair((&t0, 1000), (&t1, 1000));

        let (input, next) = p.get_input_amount(&amount(&t1, 100))?;
        // floor(1000 * 100 * 1000 / (900 * 997)) + 1
        assert_eq!(input, amount(&t0, 112));
        assert_eq!(next.reserve0(), &amount(&t0, 1112));
        assert_eq!(next.reserve1(), &amount(&t1, 900));

        assert!(matches!(p.get_input_amount(&amount(&t1, 1000)), Err(SdkError::InsufficientReserves)));
        assert!(matches!(p.get_input_amount(&amount(&t1, 1001)), Err(SdkError::InsufficientReserves)));
        Ok(())
    }

    #[test]
    fn test_quoted_input_buys_requested_output() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(1, 1);
        let t1 = Token::repeat_byte(1, 2);
        let p = pair((&t0, 1_000_000), (&t1, 3_000_000));

        for out in [1u64, 7, 100, 999, 12_345, 250_000, 1_497_745, 2_999_999] {
            let (input, _) = p.get_input_amount(&amount(&t1, out))?;
            let (output, _) = p.get_output_amount(&input)?;
            assert!(output.quotient() >= BigInt::from(out), "output {} for input {} quoted for {}", output.quotient(), input.quotient(), out);
        }
        Ok(())
    }

    #[test]
    fn test_requoting_small_output_covers_original_input() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(1, 1);
        let t1 = Token::repeat_byte(1, 2);
        let p = pair((&t0, 1_000_000), (&t1, 3_000_000));

        // flooring the output of a large trade can lose more than the +1 in get_input_amount
        for x in [2u64, 7, 100, 999, 12_345] {
            let (output, _) = p.get_output_amount(&amount(&t0, x))?;
            let (input, _) = p.get_input_amount(&output)?;
            assert!(input.quotient() >= BigInt::from(x), "input {} for output {} from {}", input.quotient(), output.quotient(), x);
        }
        Ok(())
    }

    #[test]
    fn test_negative_amounts_are_rejected() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(1, 1);
        let t1 = Token::repeat_byte(1, 2);

        let negative_reserve = Pair::new(amount(&t0, 100), CurrencyAmount::from_raw_amount(t1.clone(), -5), None);
        assert!(matches!(negative_reserve, Err(SdkError::NegativeAmount)));

        // -1000 would zero the denominator on this pair
        let p = pair((&t0, 997), (&t1, 1000));
        let minus_1000 = CurrencyAmount::from_raw_amount(t0.clone(), -1000);
        assert!(matches!(p.get_output_amount(&minus_1000), Err(SdkError::NegativeAmount)));
        assert!(matches!(p.get_input_amount(&CurrencyAmount::from_raw_amount(t1.clone(), -1)), Err(SdkError::NegativeAmount)));
        Ok(())
    }

    #[test]
    fn test_get_liquidity_minted_first_deposit() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(4, 1);
        let t1 = Token::repeat_byte(4, 2);
        let p = pair((&t0, 0), (&t1, 0));
        let supply = CurrencyAmount::from_raw_amount(p.liquidity_token().clone(), 0);

        assert!(matches!(
            p.get_liquidity_minted(&supply, &amount(&t0, 1000), &amount(&t1, 1000)),
            Err(SdkError::InsufficientInputAmount)
        ));
        assert!(matches!(
            p.get_liquidity_minted(&supply, &amount(&t0, 1_000_000), &amount(&t1, 1)),
            Err(SdkError::InsufficientInputAmount)
        ));

        let liquidity = p.get_liquidity_minted(&supply, &amount(&t0, 1001), &amount(&t1, 1001))?;
        assert_eq!(liquidity.quotient().to_string(), "1");
        assert_eq!(liquidity.currency().wrapped(), p.liquidity_token());
        Ok(())
    }

    #[test]
    fn test_get_liquidity_minted_existing_supply() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(4, 1);
        let t1 = Token::repeat_byte(4, 2);
        let p = pair((&t0, 10000), (&t1, 10000));
        let supply = CurrencyAmount::from_raw_amount(p.liquidity_token().clone(), 10000);

        let liquidity = p.get_liquidity_minted(&supply, &amount(&t0, 2000), &amount(&t1, 2000))?;
        assert_eq!(liquidity.quotient().to_string(), "2000");

        let wrong_supply = amount(&t0, 10000);
        assert!(matches!(
            p.get_liquidity_minted(&wrong_supply, &amount(&t0, 2000), &amount(&t1, 2000)),
            Err(SdkError::TokenMismatch)
        ));
        assert!(matches!(p.get_liquidity_minted(&supply, &amount(&t0, 2000), &amount(&t0, 2000)), Err(SdkError::TokenMismatch)));
        assert!(matches!(
            p.get_liquidity_minted(&supply, &amount(&t0, 2000), &amount(&Token::repeat_byte(4, 3), 2000)),
            Err(SdkError::TokenMismatch)
        ));

        let negative = CurrencyAmount::from_raw_amount(t1.clone(), -2000);
        assert!(matches!(p.get_liquidity_minted(&supply, &amount(&t0, 2000), &negative), Err(SdkError::NegativeAmount)));
        let empty_supply = CurrencyAmount::from_raw_amount(p.liquidity_token().clone(), 0);
        assert!(matches!(p.get_liquidity_minted(&empty_supply, &amount(&t0, 2000), &negative), Err(SdkError::NegativeAmount)));
        Ok(())
    }

    #[test]
    fn test_get_liquidity_value_fee_off() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(4, 1);
        let t1 = Token::repeat_byte(4, 2);
        let p = pair((&t0, 1000), (&t1, 1000));
        let lp = p.liquidity_token().clone();
        let supply = CurrencyAmount::from_raw_amount(lp.clone(), 1000);
        let half = CurrencyAmount::from_raw_amount(lp.clone(), 500);

        let value = p.get_liquidity_value(&t0, &supply, &supply, false, None)?;
        assert_eq!(value.currency().wrapped(), &t0);
        assert_eq!(value.quotient().to_string(), "1000");

        let value = p.get_liquidity_value(&t0, &supply, &half, false, None)?;
        assert_eq!(value.quotient().to_string(), "500");

        let value = p.get_liquidity_value(&t1, &supply, &supply, false, None)?;
        assert_eq!(value.currency().wrapped(), &t1);
        assert_eq!(value.quotient().to_string(), "1000");

        let too_much = CurrencyAmount::from_raw_amount(lp.clone(), 1001);
        assert!(matches!(p.get_liquidity_value(&t0, &supply, &too_much, false, None), Err(SdkError::InvalidLiquidity)));

        let negative = CurrencyAmount::from_raw_amount(lp, -1);
        assert!(matches!(p.get_liquidity_value(&t0, &supply, &negative, false, None), Err(SdkError::NegativeAmount)));
        Ok(())
    }

    #[test]
    fn test_get_liquidity_value_fee_on() -> eyre::Result<()> {
        let t0 = Token::repeat_byte(4, 1);
        let t1 = Token::repeat_byte(4, 2);
        let p = pair((&t0, 1000), (&t1, 1000));
        let half = CurrencyAmount::from_raw_amount(p.liquidity_token().clone(), 500);

        let value = p.get_liquidity_value(&t0, &half, &half, true, Some(U256::from(250_000)))?;
        assert_eq!(value.currency().wrapped(), &t0);
        // ceiling(1000 - (500 * (1 / 6)))
        assert_eq!(value.quotient().to_string(), "917");

        assert!(matches!(p.get_liquidity_value(&t0, &half, &half, true, None), Err(SdkError::InvalidKLast)));

        // kLast of zero or a shrunken k leaves the supply untouched
        let value = p.get_liquidity_value(&t0, &half, &half, true, Some(U256::ZERO))?;
        assert_eq!(value.quotient().to_string(), "1000");
        let value = p.get_liquidity_value(&t0, &half, &half, true, Some(U256::from(4_000_000)))?;
        assert_eq!(value.quotient().to_string(), "1000");
        Ok(())
    }
}
