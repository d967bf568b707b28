//! Routing of client calls to query and signing backends.

use std::sync::Arc;

use dapp_kit::*;
use serde_json::json;

use crate::support::*;

fn signed_session(
    query: Arc<RecordingQueryBackend>,
    signing: Arc<RecordingSigningBackend>,
) -> SessionState {
    SessionState::new()
        .with_query_backend(query)
        .with_signing_backend(signing)
        .with_account(AccountData::new(WALLET))
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_query_without_signer() {
    init_tracing();
    let definition = ContractDefinition::new()
        .query("getCount", |_, _| WirePayload::empty("count"))
        .define()
        .unwrap();
    let backend = RecordingQueryBackend::returning(json!({ "count": 7 }));
    let client = create_contract_client(
        CONTRACT,
        &definition,
        SessionState::new().with_query_backend(backend.clone()),
    );

    let output = client.call("getCount").await.unwrap();

    assert_eq!(output, CallOutput::Query(json!({ "count": 7 })));
    assert_eq!(
        backend.calls(),
        [RecordedQuery {
            contract: CONTRACT.to_string(),
            msg: json!({ "count": {} }),
        }]
    );
}

#[tokio::test]
async fn test_query_without_backend_is_unavailable() {
    let client = create_contract_client(CONTRACT, &counter_definition(), SessionState::new());

    let err = client.call("get_count").await.unwrap_err();

    assert!(matches!(err, Error::BackendUnavailable(CallKind::Query)));
    assert_eq!(err.to_string(), "No client is available to execute query");
}

#[tokio::test]
async fn test_typed_query_decodes_result() {
    #[derive(serde::Deserialize)]
    struct CountResponse {
        count: u64,
    }

    let backend = RecordingQueryBackend::returning(json!({ "count": 41 }));
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        SessionState::new().with_query_backend(backend),
    );

    let response: CountResponse = client.query("get_count").await.unwrap();
    assert_eq!(response.count, 41);
}

#[tokio::test]
async fn test_query_sees_caller_address_in_context() {
    let definition = ContractDefinition::new()
        .query("my_balance", |ctx, _| {
            WirePayload::new("balance", json!({ "address": ctx.address }))
        })
        .define()
        .unwrap();
    let query = RecordingQueryBackend::returning(json!({ "balance": "5" }));

    let anonymous = create_contract_client(
        CONTRACT,
        &definition,
        SessionState::new().with_query_backend(query.clone()),
    );
    anonymous.call("my_balance").await.unwrap();

    let signed = create_contract_client(
        CONTRACT,
        &definition,
        signed_session(query.clone(), RecordingSigningBackend::new()),
    );
    signed.call("my_balance").await.unwrap();

    let calls = query.calls();
    assert_eq!(calls[0].msg, json!({ "balance": { "address": null } }));
    assert_eq!(calls[1].msg, json!({ "balance": { "address": WALLET } }));
}

#[tokio::test]
async fn test_name_in_both_maps_routes_as_query() {
    let raw = ContractDefinition::new()
        .message("sync", |_, _| WirePayload::empty("sync"))
        .query("sync", |_, _| WirePayload::empty("sync_status"));
    let query = RecordingQueryBackend::returning(json!({ "synced": true }));
    let client = create_contract_client(
        CONTRACT,
        &raw,
        SessionState::new().with_query_backend(query.clone()),
    );

    assert_eq!(client.function_kind("sync"), Some(CallKind::Query));
    let output = client.call("sync").await.unwrap();

    assert_eq!(output, CallOutput::Query(json!({ "synced": true })));
    assert_eq!(query.calls()[0].msg, json!({ "sync": {} }));
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_message_without_account_is_unavailable() {
    let signing = RecordingSigningBackend::new();
    let definition = ContractDefinition::new()
        .message("increment", |_, _| WirePayload::empty("increment"))
        .define()
        .unwrap();
    let client = create_contract_client(
        CONTRACT,
        &definition,
        SessionState::new().with_signing_backend(signing.clone()),
    );

    let err = client.call("increment").await.unwrap_err();

    assert!(matches!(err, Error::BackendUnavailable(CallKind::Message)));
    assert_eq!(err.to_string(), "No client is available to execute message");
    assert!(signing.calls().is_empty());
}

#[tokio::test]
async fn test_message_without_signing_backend_is_unavailable() {
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        SessionState::new().with_account(AccountData::new(WALLET)),
    );

    let err = client.execute("increment").await.unwrap_err();
    assert!(matches!(err, Error::BackendUnavailable(CallKind::Message)));
}

#[tokio::test]
async fn test_message_with_defaults() {
    init_tracing();
    let signing = RecordingSigningBackend::new();
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        signed_session(RecordingQueryBackend::returning(json!({})), signing.clone()),
    );

    let result = client.execute("increment").await.unwrap();

    assert_eq!(result.transaction_hash, "TX1");
    assert_eq!(
        signing.calls(),
        [RecordedExecute {
            sender: WALLET.to_string(),
            contract: CONTRACT.to_string(),
            msg: json!({ "increment": {} }),
            fee: Fee::Auto,
            memo: None,
            funds: None,
        }]
    );
}

#[tokio::test]
async fn test_message_with_params_and_options() {
    let signing = RecordingSigningBackend::new();
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        signed_session(RecordingQueryBackend::returning(json!({})), signing.clone()),
    );

    let output = client
        .call("transfer")
        .params(json!({ "to": "addr1", "amount": "10" }))
        .options(ExecutionOptions::new().memo("m").fee(5u32))
        .await
        .unwrap();

    assert_eq!(output.kind(), CallKind::Message);
    assert_eq!(
        signing.calls(),
        [RecordedExecute {
            sender: WALLET.to_string(),
            contract: CONTRACT.to_string(),
            msg: json!({ "transfer": { "recipient": "addr1", "amount": "10" } }),
            fee: Fee::Multiplier(5.0),
            memo: Some("m".to_string()),
            funds: None,
        }]
    );
}

#[tokio::test]
async fn test_zero_fee_multiplier_falls_back_to_auto() {
    let signing = RecordingSigningBackend::new();
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        signed_session(RecordingQueryBackend::returning(json!({})), signing.clone()),
    );

    client.execute("increment").fee(0u32).await.unwrap();

    assert_eq!(signing.calls()[0].fee, Fee::Auto);
}

#[tokio::test]
async fn test_message_forwards_funds() {
    let signing = RecordingSigningBackend::new();
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        signed_session(RecordingQueryBackend::returning(json!({})), signing.clone()),
    );

    client
        .execute("increment")
        .funds(vec![Coin::new(100, "ucosm")])
        .fee(Fee::Fixed(StdFee::new(vec![Coin::new(5000, "ucosm")], 200_000)))
        .await
        .unwrap();

    let call = &signing.calls()[0];
    assert_eq!(call.funds, Some(vec![Coin::new(100, "ucosm")]));
    assert!(matches!(call.fee, Fee::Fixed(_)));
    assert_eq!(call.memo, None);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unknown_function() {
    let client = create_contract_client(CONTRACT, &counter_definition(), SessionState::new());

    let err = client.call("decrement").await.unwrap_err();
    assert!(matches!(err, Error::UnknownFunction(ref name) if name == "decrement"));
}

#[tokio::test]
async fn test_kind_mismatch_is_reported_before_dispatch() {
    let signing = RecordingSigningBackend::new();
    let query = RecordingQueryBackend::returning(json!({}));
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        signed_session(query.clone(), signing.clone()),
    );

    let err = client.query::<serde_json::Value>("increment").await.unwrap_err();
    assert!(matches!(
        err,
        Error::KindMismatch {
            expected: CallKind::Query,
            actual: CallKind::Message,
            ..
        }
    ));

    let err = client.execute("get_count").await.unwrap_err();
    assert!(matches!(
        err,
        Error::KindMismatch {
            expected: CallKind::Message,
            actual: CallKind::Query,
            ..
        }
    ));

    assert!(signing.calls().is_empty());
    assert!(query.calls().is_empty());
}

#[tokio::test]
async fn test_query_failure_passes_through() {
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        SessionState::new()
            .with_query_backend(RecordingQueryBackend::failing("unknown contract")),
    );

    let err = client.call("get_count").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Backend(BackendError::Rejected(ref r)) if r == "unknown contract"
    ));
}

#[tokio::test]
async fn test_execute_failure_passes_through() {
    let signing = RecordingSigningBackend::failing("insufficient funds");
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        signed_session(RecordingQueryBackend::returning(json!({})), signing.clone()),
    );

    let err = client.execute("increment").await.unwrap_err();
    assert_eq!(err.to_string(), "Rejected: insufficient funds");
    assert_eq!(signing.calls().len(), 1);
}

#[tokio::test]
async fn test_unserializable_params_fail_on_await() {
    struct Unserializable;

    impl serde::Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not today"))
        }
    }

    let client = create_contract_client(CONTRACT, &counter_definition(), SessionState::new());
    let err = client.call("transfer").params(Unserializable).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let signing = RecordingSigningBackend::new();
    let query = RecordingQueryBackend::returning(json!({ "count": 1 }));
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        signed_session(query.clone(), signing.clone()),
    );

    let calls = (0..8).map(|i| {
        let client = client.clone();
        async move {
            if i % 2 == 0 {
                client.call("get_count").await
            } else {
                client.call("increment").await
            }
        }
    });
    let outputs = futures::future::join_all(calls).await;

    assert!(outputs.iter().all(Result::is_ok));
    assert_eq!(query.calls().len(), 4);
    assert_eq!(signing.calls().len(), 4);
}

#[tokio::test]
async fn test_calls_run_on_spawned_tasks() {
    let query = RecordingQueryBackend::returning(json!({ "count": 2 }));
    let client = create_contract_client(
        CONTRACT,
        &counter_definition(),
        SessionState::new().with_query_backend(query.clone()),
    );

    let handle = tokio::spawn(client.call("get_count").into_future());
    let output = handle.await.unwrap().unwrap();

    assert_eq!(output.into_query(), Some(json!({ "count": 2 })));
}
