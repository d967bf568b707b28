//! Declarative contract clients for CosmWasm dApps.
//!
//! **dapp-kit** lets you declare a contract's callable surface as two
//! disjoint sets of functions, *messages* (state-mutating) and *queries*
//! (read-only), combine declarations, and get a client that routes every
//! call to the right backend.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dapp_kit::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dapp_kit::Error> {
//!     let dapp = DApp::from_env()?;
//!     dapp.connect();
//!
//!     let counter = ContractDefinition::new()
//!         .query("get_count", |_, _| WirePayload::empty("count"))
//!         .message("increment", |_, _| WirePayload::empty("increment"))
//!         .define()?;
//!
//!     let client = dapp.contract("wasm1counter", &counter);
//!     let count = client.call("get_count").await?;
//!     println!("{:?}", count);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Names are disjoint**: no function is both a message and a query, checked
//!    when defining and after every merge
//! 2. **Routing is decided once**: a client classifies each name when it is
//!    created, never per call
//! 3. **No hidden globals**: clients dispatch through an explicit [`Session`]
//! 4. **Failures pass through**: backend errors reach the caller unchanged
//!
//! # Core Types
//!
//! - [`ContractDefinition`] - Messages and queries of a contract
//! - [`WirePayload`] - Single-variant JSON record sent to the chain
//! - [`ContractClient`] - Client bound to an address and a definition
//! - [`ExecutionOptions`] - Fee, memo and funds for messages
//!
//! # Typed Contract Interfaces
//!
//! Use the `#[dapp_kit::contract]` macro to create type-safe contract clients:
//!
//! ```ignore
//! use dapp_kit::*;
//!
//! #[dapp_kit::contract]
//! pub trait Counter {
//!     #[variant("count")]
//!     fn get_count(&self) -> CountResponse;
//!
//!     #[message]
//!     fn increment(&mut self);
//! }
//!
//! let counter = dapp.typed::<dyn Counter>("wasm1counter");
//! let count = counter.get_count().await?;
//! counter.increment().memo("tick").await?;
//! ```

pub mod client;
pub mod contract;
pub mod definition;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BackendError, CallKind, DefinitionError, Error, PayloadError};
pub use types::*;

// Re-export definition types
pub use definition::{
    ContractDefinition, ContractFunction, FunctionMap, define_contract, extend_contract_definition,
};

// Re-export contract types
pub use contract::{Contract, TypedClient};

// Re-export client types
pub use client::{
    CallOutput, Config, ContractCall, ContractClient, DApp, ExecuteCall, LcdQueryBackend,
    QueryBackend, QueryCall, Session, SessionState, SigningBackend, create_contract_client,
};

// Re-export proc macros
pub use dapp_kit_macros::contract;
pub use dapp_kit_macros::message;
pub use dapp_kit_macros::variant;
