//! The contract client and its function registry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::definition::{ContractDefinition, ContractFunction};
use crate::error::CallKind;

use super::call::{ContractCall, ExecuteCall, QueryCall};
use super::session::Session;

/// A declared function tagged with how it is routed.
#[derive(Clone)]
pub(crate) enum FunctionEntry {
    Query(ContractFunction),
    Message(ContractFunction),
}

impl FunctionEntry {
    pub(crate) fn kind(&self) -> CallKind {
        match self {
            FunctionEntry::Query(_) => CallKind::Query,
            FunctionEntry::Message(_) => CallKind::Message,
        }
    }

    pub(crate) fn function(&self) -> &ContractFunction {
        match self {
            FunctionEntry::Query(f) | FunctionEntry::Message(f) => f,
        }
    }
}

type Registry = BTreeMap<String, FunctionEntry>;

/// Build the registry from queries, then messages.
///
/// A name is routed as a query iff it is a key of `queries`. If an
/// unvalidated definition declares it in both maps, the message function is
/// stored but the call still goes to the query backend.
fn build_registry(definition: &ContractDefinition) -> Registry {
    let queries = definition
        .queries
        .iter()
        .map(|(name, f)| (name.clone(), FunctionEntry::Query(Arc::clone(f))));
    let messages = definition.messages.iter().map(|(name, f)| {
        let entry = if definition.queries.contains_key(name) {
            FunctionEntry::Query(Arc::clone(f))
        } else {
            FunctionEntry::Message(Arc::clone(f))
        };
        (name.clone(), entry)
    });

    queries.chain(messages).collect()
}

/// Create a client for the contract at `address`.
///
/// Every function of `definition` becomes invocable by name. Whether a name
/// is a query or a message is decided here, once, from the definition.
///
/// # Example
///
/// ```rust,no_run
/// use dapp_kit::*;
///
/// # async fn example(session: SessionState) -> Result<(), Error> {
/// let definition = ContractDefinition::new()
///     .query("get_count", |_, _| WirePayload::empty("count"))
///     .define()?;
///
/// let counter = create_contract_client("wasm1counter", &definition, session);
/// let count = counter.call("get_count").await?;
/// # Ok(())
/// # }
/// ```
pub fn create_contract_client(
    address: impl Into<String>,
    definition: &ContractDefinition,
    session: impl Session + 'static,
) -> ContractClient {
    ContractClient::new(address, definition, Arc::new(session))
}

/// A client bound to one contract address and one definition.
///
/// Cloning is cheap; clones share the registry and the session.
#[derive(Clone)]
pub struct ContractClient {
    address: Arc<str>,
    registry: Arc<Registry>,
    session: Arc<dyn Session>,
}

impl ContractClient {
    /// Create a client dispatching through an already shared session.
    pub fn new(
        address: impl Into<String>,
        definition: &ContractDefinition,
        session: Arc<dyn Session>,
    ) -> Self {
        let address: Arc<str> = Arc::from(address.into());
        let registry = build_registry(definition);

        tracing::debug!(
            contract = %address,
            queries = definition.queries.len(),
            messages = definition.messages.len(),
            "created contract client"
        );

        Self {
            address,
            registry: Arc::new(registry),
            session,
        }
    }

    /// The contract address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Names of all invocable functions, in lexicographic order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Whether `name` is a query or a message, if it is declared.
    pub fn function_kind(&self, name: &str) -> Option<CallKind> {
        self.registry.get(name).map(FunctionEntry::kind)
    }

    /// Returns true if `name` is declared.
    pub fn has_function(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Call the function `name`.
    ///
    /// Returns a builder that accepts parameters and execution options
    /// before awaiting.
    pub fn call(&self, name: &str) -> ContractCall {
        ContractCall::new(self.clone(), name.to_string())
    }

    /// Call the query `name` and deserialize its result.
    pub fn query<T>(&self, name: &str) -> QueryCall<T> {
        QueryCall::new(self.call(name))
    }

    /// Call the message `name`.
    pub fn execute(&self, name: &str) -> ExecuteCall {
        ExecuteCall::new(self.call(name))
    }

    pub(crate) fn entry(&self, name: &str) -> Option<&FunctionEntry> {
        self.registry.get(name)
    }

    pub(crate) fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }
}

impl fmt::Debug for ContractClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let functions: Vec<(&str, CallKind)> = self
            .registry
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.kind()))
            .collect();

        f.debug_struct("ContractClient")
            .field("address", &self.address)
            .field("functions", &functions)
            .finish()
    }
}
