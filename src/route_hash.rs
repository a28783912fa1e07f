use crate::pair::Pair;
use crate::token::Token;
use alloy_primitives::hex;
use serde::{Deserialize, Serialize};
use sha2::digest::Update;
use sha2::{Digest, Sha256};
use std::fmt::{Debug, Display};

/// Stable identity of a route, used to deduplicate and compare routes across processes.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct RouteHash(pub [u8; 32]);

impl Display for RouteHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode_prefixed(self.0))
    }
}

impl Debug for RouteHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RouteHash({})", hex::encode_prefixed(self.0))
    }
}

impl From<[u8; 32]> for RouteHash {
    fn from(hash: [u8; 32]) -> Self {
        RouteHash(hash)
    }
}

impl Serialize for RouteHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode_prefixed(self.0))
    }
}

impl<'de> Deserialize<'de> for RouteHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let hash: [u8; 32] = bytes.try_into().map_err(|_| serde::de::Error::custom("route hash must be 32 bytes"))?;
        Ok(RouteHash(hash))
    }
}

/// SHA-256 over the path token addresses followed by the pair addresses.
pub fn generate_route_hash(path: &[Token], pairs: &[Pair]) -> RouteHash {
    let mut hasher = Sha256::new();

    for token in path {
        Update::update(&mut hasher, token.get_address().as_slice());
    }
    for pair in pairs {
        Update::update(&mut hasher, pair.get_address().as_slice());
    }

    RouteHash(hasher.finalize().into())
}
