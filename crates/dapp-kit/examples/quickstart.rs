//! Quickstart - Querying a CosmWasm contract
//!
//! Covers: configuration, definitions, merging, dynamic and typed queries
//!
//! Run: cargo run --example quickstart
//!
//! Set environment variables:
//!   DAPP_CHAIN_ID=malaga-420
//!   DAPP_RPC_ENDPOINT=https://api.malaga-420.cosmwasm.com
//!   DAPP_PREFIX=wasm
//!   COUNTER_ADDRESS=wasm1...

use dapp_kit::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

#[dapp_kit::contract]
pub trait Counter {
    #[variant("get_count")]
    fn count(&self) -> CountResponse;

    #[message]
    fn increment(&mut self);

    #[message]
    fn reset(&mut self, args: serde_json::Value);
}

// ============================================================================
// 1. Declare and combine definitions
// ============================================================================

fn definitions() -> Result<ContractDefinition, Error> {
    println!("=== Definitions ===\n");

    let base = ContractDefinition::new()
        .query("get_count", |_, _| WirePayload::empty("get_count"))
        .message("increment", |_, _| WirePayload::empty("increment"))
        .define()?;

    let admin = ContractDefinition::new()
        .message("reset", |_, params| WirePayload::from_params("reset", params))
        .define()?;

    let counter = extend_contract_definition(&base, &admin)?;
    println!("{:?}", counter);

    // Declaring the same name twice is rejected
    let clash = ContractDefinition::new()
        .query("reset", |_, _| WirePayload::empty("reset"))
        .define()?;
    if let Err(err) = extend_contract_definition(&counter, &clash) {
        println!("{err}");
    }

    Ok(counter)
}

// ============================================================================
// 2. Query through the configured endpoint
// ============================================================================

async fn query_example(
    dapp: &DApp,
    address: &str,
    counter: &ContractDefinition,
) -> Result<(), Error> {
    println!("\n=== Query Example ===\n");

    let client = dapp.contract(address, counter);
    let output = client.call("get_count").await?;
    println!("Raw result: {:?}", output);

    let typed = dapp.typed::<dyn Counter>(address);
    let response = typed.count().await?;
    println!("Count: {}", response.count);

    // Messages need a signer, which this example does not attach
    if let Err(err) = typed.increment().await {
        println!("{err}");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let counter = definitions()?;

    let dapp = DApp::from_env()?;
    dapp.set_entry_point(|| println!("Connected"));
    dapp.connect();

    if let Ok(address) = std::env::var("COUNTER_ADDRESS") {
        query_example(&dapp, &address, &counter).await?;
    } else {
        println!("\nSet COUNTER_ADDRESS to query a deployed counter");
    }

    dapp.disconnect();
    Ok(())
}
