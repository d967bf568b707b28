//! `#[dapp_kit::contract]` interfaces driven through recording backends.

use std::sync::Arc;

use dapp_kit::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::support::*;

#[derive(Debug, Deserialize, PartialEq)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Serialize)]
pub struct AddArgs {
    pub value: u64,
}

#[dapp_kit::contract]
pub trait Counter {
    #[variant("count")]
    fn get_count(&self) -> CountResponse;

    #[message]
    fn increment(&mut self);

    #[message]
    #[variant("add_value")]
    fn add(&mut self, args: AddArgs);
}

fn connected(query: Arc<RecordingQueryBackend>, signing: Arc<RecordingSigningBackend>) -> DApp {
    let dapp = DApp::new(Config::new("testing", "http://localhost:1317", "wasm"))
        .with_query_backend(query);
    dapp.connect_with_signer(signing, AccountData::new(WALLET));
    dapp
}

#[tokio::test]
async fn test_typed_query() {
    init_tracing();
    let query = RecordingQueryBackend::returning(json!({ "count": 3 }));
    let dapp = connected(query.clone(), RecordingSigningBackend::new());
    let counter = dapp.typed::<dyn Counter>(CONTRACT);

    let response = counter.get_count().await.unwrap();

    assert_eq!(response, CountResponse { count: 3 });
    assert_eq!(query.calls()[0].msg, json!({ "count": {} }));
    assert_eq!(query.calls()[0].contract, CONTRACT);
}

#[tokio::test]
async fn test_typed_messages() {
    let signing = RecordingSigningBackend::new();
    let dapp = connected(RecordingQueryBackend::returning(json!({})), signing.clone());
    let counter = dapp.typed::<dyn Counter>(CONTRACT);

    counter.increment().await.unwrap();
    let result = counter
        .add(AddArgs { value: 5 })
        .memo("bump")
        .fee(1.5)
        .await
        .unwrap();

    assert_eq!(result.height, 2);
    assert_eq!(
        result.events_of("wasm").next().and_then(|e| e.attribute("_contract_address")),
        Some(CONTRACT)
    );

    let calls = signing.calls();
    assert_eq!(calls[0].msg, json!({ "increment": {} }));
    assert_eq!(calls[0].fee, Fee::Auto);
    assert_eq!(calls[1].msg, json!({ "add_value": { "value": 5 } }));
    assert_eq!(calls[1].fee, Fee::Multiplier(1.5));
    assert_eq!(calls[1].memo.as_deref(), Some("bump"));
    assert!(calls.iter().all(|c| c.sender == WALLET));
}

#[tokio::test]
async fn test_typed_client_exposes_dynamic_client() {
    let dapp = connected(
        RecordingQueryBackend::returning(json!({ "count": 9 })),
        RecordingSigningBackend::new(),
    );
    let counter = dapp.typed::<dyn Counter>(CONTRACT);

    assert_eq!(counter.address(), CONTRACT);
    let client = counter.client();
    assert_eq!(client.function_kind("get_count"), Some(CallKind::Query));
    assert_eq!(client.function_kind("add"), Some(CallKind::Message));

    let raw = client.query::<CountResponse>("get_count").raw().await.unwrap();
    assert_eq!(raw, json!({ "count": 9 }));
}

#[test]
fn test_interface_definition_extends_cleanly() {
    let extension = ContractDefinition::new()
        .query("owner", |_, _| WirePayload::empty("owner"))
        .define()
        .unwrap();

    let base = <dyn Counter as Contract>::definition();
    let merged = extend_contract_definition(&base, &extension).unwrap();

    assert_eq!(merged.queries.keys().collect::<Vec<_>>(), ["get_count", "owner"]);
    assert_eq!(merged.messages.keys().collect::<Vec<_>>(), ["add", "increment"]);
}

#[test]
fn test_typed_calls_block_on() {
    let query = RecordingQueryBackend::returning(json!({ "count": 1 }));
    let dapp = DApp::new(Config::new("testing", "http://localhost:1317", "wasm"))
        .with_query_backend(query);
    let counter = dapp.typed::<dyn Counter>(CONTRACT);

    let response = tokio_test::block_on(counter.get_count().into_future()).unwrap();
    assert_eq!(response.count, 1);

    let err = tokio_test::block_on(counter.increment().into_future()).unwrap_err();
    assert!(err.is_backend_unavailable());
}
