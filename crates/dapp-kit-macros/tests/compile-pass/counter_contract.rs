//! Test that a query/message contract generates valid code.

use dapp_kit::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct AddArgs {
    pub value: u64,
}

#[dapp_kit::contract]
pub trait Counter {
    fn get_count(&self) -> CountResponse;

    #[message]
    fn increment(&mut self);

    #[message]
    fn add(&mut self, args: AddArgs);
}

fn main() {
    // Verify the generated client can be constructed
    let dapp = DApp::new(Config::new("testing", "http://localhost:1317", "wasm"));
    let client: CounterClient = dapp.typed::<dyn Counter>("wasm1counter");
    assert_eq!(client.address(), "wasm1counter");

    // Verify methods exist and have correct return types
    let _query: QueryCall<CountResponse> = client.get_count();
    let _execute: ExecuteCall = client.increment().memo("tick");
    let _execute: ExecuteCall = client.add(AddArgs { value: 5 }).fee(Fee::Auto);

    // Verify the generated definition
    let definition = <dyn Counter as Contract>::definition().define().unwrap();
    assert!(definition.queries.contains_key("get_count"));
    assert!(definition.messages.contains_key("increment"));
    assert!(definition.messages.contains_key("add"));
}
