//! Typed contract interfaces.
//!
//! This module provides the [`Contract`] trait for creating type-safe contract
//! clients using the `#[dapp_kit::contract]` proc macro.
//!
//! # Why Typed Contracts?
//!
//! A [`ContractClient`] built from a [`ContractDefinition`] is invoked by
//! name, so typos compile fine and fail at runtime:
//!
//! ```rust,no_run
//! # use dapp_kit::*;
//! # async fn example(counter: &ContractClient) -> Result<(), Error> {
//! let count: u64 = counter.query("get_counnt").await?;  // typo!
//! # Ok(())
//! # }
//! ```
//!
//! With typed contracts, the compiler catches errors:
//!
//! ```ignore
//! let counter = dapp.typed::<dyn Counter>("wasm1counter");
//! let count = counter.get_count().await?;  // Compile-time checked!
//! ```
//!
//! # Defining a Contract Interface
//!
//! ```ignore
//! use dapp_kit::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[dapp_kit::contract]
//! pub trait Counter {
//!     // Query: &self, no #[message] attribute.
//!     // The wire variant defaults to the method name.
//!     #[variant("count")]
//!     fn get_count(&self) -> CountResponse;
//!
//!     // Message: &mut self + #[message]
//!     #[message]
//!     fn increment(&mut self);
//!
//!     #[message]
//!     fn add(&mut self, args: AddArgs);
//! }
//!
//! #[derive(Deserialize)]
//! pub struct CountResponse {
//!     pub count: u64,
//! }
//!
//! #[derive(Serialize)]
//! pub struct AddArgs {
//!     pub value: u64,
//! }
//! ```
//!
//! The macro generates a `CounterClient` wrapper with one method per trait
//! method, and a [`ContractDefinition`] whose functions send
//! `{ "<variant>": <args or {}> }`.

use crate::client::ContractClient;
use crate::definition::ContractDefinition;

/// Marker trait for typed contract interfaces.
///
/// This trait is automatically implemented by the `#[dapp_kit::contract]` macro
/// for each contract trait you define.
///
/// # Example
///
/// The macro generates an implementation like this:
///
/// ```ignore
/// impl Contract for dyn MyContract {
///     type Client = MyContractClient;
///
///     fn definition() -> ContractDefinition { /* ... */ }
/// }
/// ```
pub trait Contract {
    /// The generated client type for this contract interface.
    type Client: TypedClient;

    /// The definition derived from the interface's methods.
    fn definition() -> ContractDefinition;
}

/// Trait for typed client constructors.
///
/// This trait is implemented by the generated client structs to enable
/// construction via [`DApp::typed`](crate::DApp::typed).
pub trait TypedClient: Sized {
    /// Wrap a dynamic client.
    fn from_client(client: ContractClient) -> Self;

    /// The wrapped dynamic client.
    fn client(&self) -> &ContractClient;
}
