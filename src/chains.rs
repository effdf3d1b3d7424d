use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HistoryError;

/// Chain keys as the UI selects them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BridgeChain {
    #[default]
    Ethc,
    Bscc,
    Btcc,
    Zecc,
    Bchc,
    Dogc,
}

/// Canonical chain identifiers as stored on transactions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RenChain {
    Ethereum,
    BinanceSmartChain,
    Bitcoin,
    Zcash,
    BitcoinCash,
    Dogecoin,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainConfig {
    pub full: &'static str,
    pub short: &'static str,
}

/// Chains offered by the history dialog's "Viewing" dropdown.
pub const SUPPORTED_MINT_DESTINATION_CHAINS: &[BridgeChain] = &[BridgeChain::Ethc, BridgeChain::Bscc];

impl BridgeChain {
    pub fn key(&self) -> &'static str {
        match self {
            BridgeChain::Ethc => "ethc",
            BridgeChain::Bscc => "bscc",
            BridgeChain::Btcc => "btcc",
            BridgeChain::Zecc => "zecc",
            BridgeChain::Bchc => "bchc",
            BridgeChain::Dogc => "dogc",
        }
    }

    pub fn config(&self) -> ChainConfig {
        match self {
            BridgeChain::Ethc => ChainConfig { full: "Ethereum", short: "ETH" },
            BridgeChain::Bscc => ChainConfig { full: "Binance Smart Chain", short: "BSC" },
            BridgeChain::Btcc => ChainConfig { full: "Bitcoin", short: "BTC" },
            BridgeChain::Zecc => ChainConfig { full: "Zcash", short: "ZEC" },
            BridgeChain::Bchc => ChainConfig { full: "Bitcoin Cash", short: "BCH" },
            BridgeChain::Dogc => ChainConfig { full: "Dogecoin", short: "DOGE" },
        }
    }

    pub fn ren_chain(&self) -> RenChain {
        match self {
            BridgeChain::Ethc => RenChain::Ethereum,
            BridgeChain::Bscc => RenChain::BinanceSmartChain,
            BridgeChain::Btcc => RenChain::Bitcoin,
            BridgeChain::Zecc => RenChain::Zcash,
            BridgeChain::Bchc => RenChain::BitcoinCash,
            BridgeChain::Dogc => RenChain::Dogecoin,
        }
    }
}

impl fmt::Display for BridgeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BridgeChain {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ethc" => Ok(BridgeChain::Ethc),
            "bscc" => Ok(BridgeChain::Bscc),
            "btcc" => Ok(BridgeChain::Btcc),
            "zecc" => Ok(BridgeChain::Zecc),
            "bchc" => Ok(BridgeChain::Bchc),
            "dogc" => Ok(BridgeChain::Dogc),
            _ => Err(HistoryError::InvalidChainSelection(s.to_string())),
        }
    }
}

impl RenChain {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenChain::Ethereum => "ethereum",
            RenChain::BinanceSmartChain => "binanceSmartChain",
            RenChain::Bitcoin => "bitcoin",
            RenChain::Zcash => "zcash",
            RenChain::BitcoinCash => "bitcoinCash",
            RenChain::Dogecoin => "dogecoin",
            RenChain::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RenChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a displayed chain key to the identifier transactions are tagged with.
pub fn to_canonical_chain(display_chain: &str) -> Result<RenChain, HistoryError> {
    display_chain.parse::<BridgeChain>().map(|chain| chain.ren_chain())
}
