//! Per-call routing from a client to a backend.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CallKind, Error};
use crate::types::{CallContext, ExecuteResult, ExecutionOptions, Params};

use super::contract::{ContractClient, FunctionEntry};

/// What a backend returned for a call.
#[derive(Clone, Debug, PartialEq)]
pub enum CallOutput {
    /// Decoded JSON returned by a query.
    Query(Value),
    /// Transaction result of an executed message.
    Execute(ExecuteResult),
}

impl CallOutput {
    /// Which kind of call produced this output.
    pub fn kind(&self) -> CallKind {
        match self {
            CallOutput::Query(_) => CallKind::Query,
            CallOutput::Execute(_) => CallKind::Message,
        }
    }

    /// The query result, if this is one.
    pub fn into_query(self) -> Option<Value> {
        match self {
            CallOutput::Query(value) => Some(value),
            CallOutput::Execute(_) => None,
        }
    }

    /// The execution result, if this is one.
    pub fn into_execute(self) -> Option<ExecuteResult> {
        match self {
            CallOutput::Execute(result) => Some(result),
            CallOutput::Query(_) => None,
        }
    }

    /// Deserialize the output into `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let value = match self {
            CallOutput::Query(value) => value,
            CallOutput::Execute(result) => serde_json::to_value(result)?,
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Route a call of `name` to the matching backend.
///
/// The call context is read from the session, the declared function builds
/// the payload, and the registry entry decides the route. Backend failures
/// are returned as they are.
pub(crate) async fn dispatch(
    client: &ContractClient,
    name: &str,
    params: Option<&Params>,
    options: &ExecutionOptions,
) -> Result<CallOutput, Error> {
    let entry = client
        .entry(name)
        .ok_or_else(|| Error::UnknownFunction(name.to_string()))?;
    let session = client.session();

    let context = CallContext::for_account(session.active_account().as_ref());
    let payload = (entry.function())(&context, params);

    match entry {
        FunctionEntry::Query(_) => {
            let backend = session
                .query_backend()
                .ok_or(Error::BackendUnavailable(CallKind::Query))?;

            tracing::debug!(
                contract = client.address(),
                function = name,
                variant = payload.variant(),
                "dispatching query"
            );

            let result = backend.query(client.address(), &payload).await?;
            Ok(CallOutput::Query(result))
        }
        FunctionEntry::Message(_) => {
            let (Some(backend), Some(sender)) =
                (session.signing_backend(), context.address.as_deref())
            else {
                return Err(Error::BackendUnavailable(CallKind::Message));
            };

            let fee = options.resolved_fee();
            tracing::debug!(
                contract = client.address(),
                function = name,
                variant = payload.variant(),
                sender,
                %fee,
                "dispatching message"
            );

            let result = backend
                .execute(
                    sender,
                    client.address(),
                    &payload,
                    fee,
                    options.memo.as_deref(),
                    options.funds.as_deref(),
                )
                .await?;
            Ok(CallOutput::Execute(result))
        }
    }
}
