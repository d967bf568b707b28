//! Backend capabilities consumed by contract clients.
//!
//! The client never talks to the chain itself. Queries go to a
//! [`QueryBackend`], messages to a [`SigningBackend`]; both are supplied by
//! the [session](super::Session).
//!
//! # Example Implementation
//!
//! ```rust
//! use dapp_kit::{BackendError, QueryBackend, WirePayload};
//! use futures::future::BoxFuture;
//! use serde_json::{json, Value};
//!
//! struct FixedCount(u64);
//!
//! impl QueryBackend for FixedCount {
//!     fn query<'a>(
//!         &'a self,
//!         _contract: &'a str,
//!         _msg: &'a WirePayload,
//!     ) -> BoxFuture<'a, Result<Value, BackendError>> {
//!         let count = self.0;
//!         Box::pin(async move { Ok(json!({ "count": count })) })
//!     }
//! }
//! ```

use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::BackendError;
use crate::types::{Coin, ExecuteResult, Fee, WirePayload};

/// Answers read-only contract queries.
pub trait QueryBackend: Send + Sync {
    /// Run a smart query against `contract` and return the decoded JSON.
    fn query<'a>(
        &'a self,
        contract: &'a str,
        msg: &'a WirePayload,
    ) -> BoxFuture<'a, Result<Value, BackendError>>;
}

/// Signs and broadcasts contract messages.
pub trait SigningBackend: Send + Sync {
    /// Execute `msg` on `contract` on behalf of `sender`.
    fn execute<'a>(
        &'a self,
        sender: &'a str,
        contract: &'a str,
        msg: &'a WirePayload,
        fee: Fee,
        memo: Option<&'a str>,
        funds: Option<&'a [Coin]>,
    ) -> BoxFuture<'a, Result<ExecuteResult, BackendError>>;
}

impl<T: QueryBackend + ?Sized> QueryBackend for Arc<T> {
    fn query<'a>(
        &'a self,
        contract: &'a str,
        msg: &'a WirePayload,
    ) -> BoxFuture<'a, Result<Value, BackendError>> {
        (**self).query(contract, msg)
    }
}

impl<T: SigningBackend + ?Sized> SigningBackend for Arc<T> {
    fn execute<'a>(
        &'a self,
        sender: &'a str,
        contract: &'a str,
        msg: &'a WirePayload,
        fee: Fee,
        memo: Option<&'a str>,
        funds: Option<&'a [Coin]>,
    ) -> BoxFuture<'a, Result<ExecuteResult, BackendError>> {
        (**self).execute(sender, contract, msg, fee, memo, funds)
    }
}
