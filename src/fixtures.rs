// Shared pairs for trade, search and router tests.

use crate::amount::CurrencyAmount;
use crate::pair::Pair;
use crate::token::{Currency, Token};
use alloy_primitives::Address;
use lazy_static::lazy_static;

fn token(byte: u8, symbol: &str) -> Token {
    Token::new_with_data(1, Address::with_last_byte(byte), 18, Some(symbol.to_string()), None)
}

pub fn pair(token_a: &Token, reserve_a: u64, token_b: &Token, reserve_b: u64) -> Pair {
    Pair::new(CurrencyAmount::from_raw_amount(token_a.clone(), reserve_a), CurrencyAmount::from_raw_amount(token_b.clone(), reserve_b), None)
        .unwrap()
}

pub fn amount(currency: impl Into<Currency>, raw: u64) -> CurrencyAmount {
    CurrencyAmount::from_raw_amount(currency, raw)
}

lazy_static! {
    pub static ref ETHER: Currency = Currency::ether(1).unwrap();
    pub static ref WETH: Token = ETHER.wrapped().clone();
    pub static ref T0: Token = token(1, "t0");
    pub static ref T1: Token = token(2, "t1");
    pub static ref T2: Token = token(3, "t2");
    pub static ref T3: Token = token(4, "t3");
    pub static ref PAIR_0_1: Pair = pair(&T0, 1000, &T1, 1000);
    pub static ref PAIR_0_2: Pair = pair(&T0, 1000, &T2, 1100);
    pub static ref PAIR_0_3: Pair = pair(&T0, 1000, &T3, 900);
    pub static ref PAIR_1_2: Pair = pair(&T1, 1200, &T2, 1000);
    // same tokens as PAIR_1_2 with other reserves, a second pool between t1 and t2
    pub static ref PAIR_1_2_B: Pair = pair(&T1, 1000, &T2, 1000);
    pub static ref PAIR_1_3: Pair = pair(&T1, 1200, &T3, 1300);
    pub static ref PAIR_WETH_0: Pair = pair(&WETH, 1000, &T0, 1000);
    pub static ref EMPTY_PAIR_0_1: Pair = pair(&T0, 0, &T1, 0);
}
