//! Per-call context and execution options.

use serde::{Deserialize, Serialize};

use super::coin::{Coin, Fee};

/// The account a signing backend signs for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    /// Bech32 address of the account.
    pub address: String,
    /// Signing algorithm, e.g. `"secp256k1"`.
    pub algo: String,
    /// Raw public key bytes.
    #[serde(default)]
    pub pubkey: Vec<u8>,
}

impl AccountData {
    /// Create account data for an address, assuming a secp256k1 key.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            algo: "secp256k1".to_string(),
            pubkey: Vec::new(),
        }
    }
}

/// Context handed to a contract function when it builds its payload.
///
/// Built fresh for every call and dropped afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallContext {
    /// The active caller address, or `None` if no account is established.
    pub address: Option<String>,
}

impl CallContext {
    /// Context for the given account.
    pub fn for_account(account: Option<&AccountData>) -> Self {
        Self {
            address: account.map(|a| a.address.clone()),
        }
    }
}

/// Options attached to a message call.
///
/// # Example
///
/// ```
/// use dapp_kit::{Coin, ExecutionOptions, Fee};
///
/// let options = ExecutionOptions::new()
///     .fee(Fee::Multiplier(1.3))
///     .memo("rent")
///     .funds(vec![Coin::new(10, "ucosm")]);
/// assert_eq!(options.memo.as_deref(), Some("rent"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutionOptions {
    /// Fee policy. Unset means [`Fee::Auto`].
    pub fee: Option<Fee>,
    pub memo: Option<String>,
    /// Coins sent along with the message.
    pub funds: Option<Vec<Coin>>,
}

impl ExecutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fee(mut self, fee: impl Into<Fee>) -> Self {
        self.fee = Some(fee.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn funds(mut self, funds: Vec<Coin>) -> Self {
        self.funds = Some(funds);
        self
    }

    /// The fee to use, falling back to automatic estimation.
    ///
    /// A multiplier of zero (or NaN) also means automatic estimation.
    pub fn resolved_fee(&self) -> Fee {
        match &self.fee {
            Some(Fee::Multiplier(m)) if *m == 0.0 || m.is_nan() => Fee::Auto,
            Some(fee) => fee.clone(),
            None => Fee::Auto,
        }
    }
}
