//! Contract definitions.
//!
//! A [`ContractDefinition`] declares a contract's callable surface as two
//! disjoint sets of functions: state-mutating *messages* and read-only
//! *queries*. Each function only builds the [`WirePayload`] to send; routing
//! happens in the [client](crate::client).
//!
//! # Defining a Contract
//!
//! ```
//! use dapp_kit::*;
//! use serde_json::json;
//!
//! let counter = ContractDefinition::new()
//!     .message("increment", |_, _| WirePayload::empty("increment"))
//!     .query("get_count", |_, _| WirePayload::empty("count"))
//!     .define()?;
//!
//! assert!(counter.messages.contains_key("increment"));
//! assert!(counter.queries.contains_key("get_count"));
//! # Ok::<(), dapp_kit::DefinitionError>(())
//! ```
//!
//! # Extending a Contract
//!
//! [`extend_contract_definition`] merges two definitions. Functions of the
//! extension replace base functions of the same name:
//!
//! ```
//! use dapp_kit::*;
//!
//! let base = ContractDefinition::new()
//!     .message("increment", |_, _| WirePayload::empty("base_increment"));
//! let extension = ContractDefinition::new()
//!     .message("increment", |_, _| WirePayload::empty("extension_increment"))
//!     .message("reset", |_, _| WirePayload::empty("reset"));
//!
//! let merged = extend_contract_definition(&base, &extension)?;
//! assert_eq!(merged.messages.len(), 2);
//! # Ok::<(), dapp_kit::DefinitionError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::DefinitionError;
use crate::types::{CallContext, Params, WirePayload};

/// A pure mapping from call context and parameters to a wire payload.
pub type ContractFunction = Arc<dyn Fn(&CallContext, Option<&Params>) -> WirePayload + Send + Sync>;

/// Functions keyed by name, iterated in lexicographic order.
pub type FunctionMap = BTreeMap<String, ContractFunction>;

/// A contract's messages and queries.
///
/// Names must not appear in both maps; [`define_contract`] and
/// [`extend_contract_definition`] enforce this.
#[derive(Clone, Default)]
pub struct ContractDefinition {
    pub messages: FunctionMap,
    pub queries: FunctionMap,
}

impl ContractDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a message function.
    pub fn message<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&CallContext, Option<&Params>) -> WirePayload + Send + Sync + 'static,
    {
        self.messages.insert(name.into(), Arc::new(function));
        self
    }

    /// Add (or replace) a query function.
    pub fn query<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&CallContext, Option<&Params>) -> WirePayload + Send + Sync + 'static,
    {
        self.queries.insert(name.into(), Arc::new(function));
        self
    }

    /// Validate this definition. See [`define_contract`].
    pub fn define(self) -> Result<Self, DefinitionError> {
        define_contract(self)
    }

    /// Returns true if neither messages nor queries are declared.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.queries.is_empty()
    }

    /// The first name declared as both a message and a query.
    fn first_collision(&self) -> Option<&str> {
        self.messages
            .keys()
            .find(|name| self.queries.contains_key(name.as_str()))
            .map(String::as_str)
    }
}

impl fmt::Debug for ContractDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractDefinition")
            .field("messages", &self.messages.keys().collect::<Vec<_>>())
            .field("queries", &self.queries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Validate that no name is both a message and a query.
///
/// Message names are scanned in order and the first one also present among
/// the queries is reported. On success the definition is returned unchanged.
///
/// # Example
///
/// ```
/// use dapp_kit::*;
///
/// let colliding = ContractDefinition::new()
///     .message("x", |_, _| WirePayload::empty("x"))
///     .query("x", |_, _| WirePayload::empty("x"));
///
/// let err = define_contract(colliding).unwrap_err();
/// assert_eq!(err, DefinitionError::NameCollision("x".to_string()));
/// ```
pub fn define_contract(
    definition: ContractDefinition,
) -> Result<ContractDefinition, DefinitionError> {
    if let Some(name) = definition.first_collision() {
        return Err(DefinitionError::NameCollision(name.to_string()));
    }
    Ok(definition)
}

/// Extend `base` with `extension`, returning a new definition.
///
/// Messages and queries are merged independently: every name of either input
/// is kept, and the extension's function wins when both declare it. The
/// result is validated again, so a name that is a message in one input and a
/// query in the other is rejected. Neither input is modified.
pub fn extend_contract_definition(
    base: &ContractDefinition,
    extension: &ContractDefinition,
) -> Result<ContractDefinition, DefinitionError> {
    define_contract(ContractDefinition {
        messages: merge_functions(&base.messages, &extension.messages),
        queries: merge_functions(&base.queries, &extension.queries),
    })
}

fn merge_functions(base: &FunctionMap, extension: &FunctionMap) -> FunctionMap {
    let mut functions = base.clone();
    for (name, function) in extension {
        functions.insert(name.clone(), Arc::clone(function));
    }
    functions
}
