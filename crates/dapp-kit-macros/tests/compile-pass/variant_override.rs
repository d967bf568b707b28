//! Test that #[variant] overrides the wire variant.

use dapp_kit::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Balance {
    pub balance: String,
}

#[derive(Debug, Serialize)]
pub struct BalanceArgs {
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct TransferArgs {
    pub recipient: String,
    pub amount: String,
}

#[dapp_kit::contract]
pub trait Token {
    #[variant("balance")]
    fn balance_of(&self, args: BalanceArgs) -> Balance;

    #[message]
    #[variant("transfer")]
    fn send(&mut self, args: TransferArgs);
}

fn main() {
    let definition = <dyn Token as Contract>::definition();

    let query = &definition.queries["balance_of"];
    let params = serde_json::json!({ "address": "wasm1alice" });
    let payload = query(&CallContext::default(), Some(&params));
    assert_eq!(
        payload.to_value(),
        serde_json::json!({ "balance": { "address": "wasm1alice" } })
    );

    let message = &definition.messages["send"];
    assert_eq!(message(&CallContext::default(), None).variant(), "transfer");
}
