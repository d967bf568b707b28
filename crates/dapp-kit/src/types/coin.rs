//! Coins and transaction fees.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// An amount of a single denomination.
///
/// Amounts are kept as decimal strings, matching the chain's JSON encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    /// Create a coin from an amount and a denomination.
    pub fn new(amount: impl ToString, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// An explicit fee: coins paid plus the gas limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

impl StdFee {
    /// Create an explicit fee.
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self {
            amount,
            gas: gas.to_string(),
        }
    }
}

/// The fee policy for a message.
///
/// Serializes as `"auto"`, a number, or a [`StdFee`] object.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Fee {
    /// Estimate gas by simulation and pay the default gas price.
    #[default]
    Auto,
    /// Estimate gas by simulation, then scale the estimate by this multiplier.
    Multiplier(f64),
    /// Pay exactly this fee.
    Fixed(StdFee),
}

impl Fee {
    /// Returns true for the automatic-estimation policy.
    pub fn is_auto(&self) -> bool {
        matches!(self, Fee::Auto)
    }
}

impl From<f64> for Fee {
    fn from(multiplier: f64) -> Self {
        Fee::Multiplier(multiplier)
    }
}

impl From<u32> for Fee {
    fn from(multiplier: u32) -> Self {
        Fee::Multiplier(f64::from(multiplier))
    }
}

impl From<StdFee> for Fee {
    fn from(fee: StdFee) -> Self {
        Fee::Fixed(fee)
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fee::Auto => f.write_str("auto"),
            Fee::Multiplier(m) => write!(f, "{}", m),
            Fee::Fixed(fee) => {
                let coins: Vec<String> = fee.amount.iter().map(Coin::to_string).collect();
                write!(f, "{} (gas {})", coins.join(","), fee.gas)
            }
        }
    }
}

impl Serialize for Fee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fee::Auto => serializer.serialize_str("auto"),
            Fee::Multiplier(m) => serializer.serialize_f64(*m),
            Fee::Fixed(fee) => fee.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Fee {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Policy(String),
            Multiplier(f64),
            Fixed(StdFee),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Policy(s) if s == "auto" => Ok(Fee::Auto),
            Repr::Policy(s) => Err(de::Error::custom(format!(
                "unknown fee policy '{}', expected 'auto'",
                s
            ))),
            Repr::Multiplier(m) => Ok(Fee::Multiplier(m)),
            Repr::Fixed(fee) => Ok(Fee::Fixed(fee)),
        }
    }
}
