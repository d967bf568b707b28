//! Call builders for contract functions.
//!
//! All builders implement `IntoFuture` so they can be `.await`ed directly.

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CallKind, Error};
use crate::types::{Coin, ExecuteResult, ExecutionOptions, Fee, Params};

use super::contract::ContractClient;
use super::dispatch::{CallOutput, dispatch};

// ============================================================================
// ContractCall
// ============================================================================

/// Builder for a call to any declared function.
///
/// Routing (query or message) follows the contract definition; execution
/// options only apply to messages.
///
/// # Example
///
/// ```rust,no_run
/// # use dapp_kit::*;
/// # async fn example(token: &ContractClient) -> Result<(), Error> {
/// let output = token
///     .call("transfer")
///     .params(serde_json::json!({ "to": "wasm1bob", "amount": "10" }))
///     .memo("rent")
///     .fee(Fee::Multiplier(1.3))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ContractCall {
    client: ContractClient,
    name: String,
    params: Result<Option<Params>, serde_json::Error>,
    options: ExecutionOptions,
}

impl ContractCall {
    pub(crate) fn new(client: ContractClient, name: String) -> Self {
        Self {
            client,
            name,
            params: Ok(None),
            options: ExecutionOptions::default(),
        }
    }

    /// Set the parameters handed to the contract function.
    ///
    /// Serialization errors are reported when the call is awaited.
    pub fn params<P: Serialize>(mut self, params: P) -> Self {
        self.params = serde_json::to_value(params).map(Some);
        self
    }

    /// Replace all execution options.
    pub fn options(mut self, options: ExecutionOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the fee policy.
    pub fn fee(mut self, fee: impl Into<Fee>) -> Self {
        self.options.fee = Some(fee.into());
        self
    }

    /// Set the transaction memo.
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.options.memo = Some(memo.into());
        self
    }

    /// Attach funds to the message.
    pub fn funds(mut self, funds: Vec<Coin>) -> Self {
        self.options.funds = Some(funds);
        self
    }

    /// The function being called.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fail early if `name` is declared under the other kind.
    fn expect_kind(&self, expected: CallKind) -> Result<(), Error> {
        match self.client.function_kind(&self.name) {
            Some(actual) if actual != expected => Err(Error::KindMismatch {
                name: self.name.clone(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }
}

impl IntoFuture for ContractCall {
    type Output = Result<CallOutput, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let params = self.params?;
            dispatch(&self.client, &self.name, params.as_ref(), &self.options).await
        })
    }
}

// ============================================================================
// QueryCall
// ============================================================================

/// Builder for a query whose result is deserialized into `T`.
///
/// # Example
///
/// ```rust,no_run
/// # use dapp_kit::*;
/// # async fn example(counter: &ContractClient) -> Result<(), Error> {
/// #[derive(serde::Deserialize)]
/// struct CountResponse {
///     count: u64,
/// }
///
/// let response: CountResponse = counter.query("get_count").await?;
/// # Ok(())
/// # }
/// ```
pub struct QueryCall<T> {
    call: ContractCall,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> QueryCall<T> {
    pub(crate) fn new(call: ContractCall) -> Self {
        Self {
            call,
            _phantom: PhantomData,
        }
    }

    /// Set the query parameters.
    pub fn params<P: Serialize>(mut self, params: P) -> Self {
        self.call = self.call.params(params);
        self
    }

    /// Get the raw JSON result instead of `T`.
    pub fn raw(self) -> QueryCall<serde_json::Value> {
        QueryCall::new(self.call)
    }
}

impl<T: DeserializeOwned + Send + 'static> IntoFuture for QueryCall<T> {
    type Output = Result<T, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            self.call.expect_kind(CallKind::Query)?;
            self.call.await?.json()
        })
    }
}

// ============================================================================
// ExecuteCall
// ============================================================================

/// Builder for a message, resolving to its [`ExecuteResult`].
///
/// # Example
///
/// ```rust,no_run
/// # use dapp_kit::*;
/// # async fn example(counter: &ContractClient) -> Result<(), Error> {
/// let result = counter
///     .execute("increment")
///     .funds(vec![Coin::new(1000, "ucosm")])
///     .await?;
/// println!("tx: {}", result.transaction_hash);
/// # Ok(())
/// # }
/// ```
pub struct ExecuteCall {
    call: ContractCall,
}

impl ExecuteCall {
    pub(crate) fn new(call: ContractCall) -> Self {
        Self { call }
    }

    /// Set the message parameters.
    pub fn params<P: Serialize>(mut self, params: P) -> Self {
        self.call = self.call.params(params);
        self
    }

    /// Replace all execution options.
    pub fn options(mut self, options: ExecutionOptions) -> Self {
        self.call = self.call.options(options);
        self
    }

    /// Set the fee policy.
    pub fn fee(mut self, fee: impl Into<Fee>) -> Self {
        self.call = self.call.fee(fee);
        self
    }

    /// Set the transaction memo.
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.call = self.call.memo(memo);
        self
    }

    /// Attach funds to the message.
    pub fn funds(mut self, funds: Vec<Coin>) -> Self {
        self.call = self.call.funds(funds);
        self
    }
}

impl IntoFuture for ExecuteCall {
    type Output = Result<ExecuteResult, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            self.call.expect_kind(CallKind::Message)?;
            let name = self.call.name.clone();
            match self.call.await? {
                CallOutput::Execute(result) => Ok(result),
                CallOutput::Query(_) => Err(Error::KindMismatch {
                    name,
                    expected: CallKind::Message,
                    actual: CallKind::Query,
                }),
            }
        })
    }
}
