//! Contract clients and the session they dispatch through.
//!
//! - [`create_contract_client`] / [`ContractClient`] — invoke declared
//!   functions by name
//! - [`Session`] — where a client finds its backends and active account
//! - [`DApp`] — session owner configured from a [`Config`]
//!
//! # Backends
//!
//! | Capability | Used for | Provided implementation |
//! |------------|----------|-------------------------|
//! | [`QueryBackend`] | queries | [`LcdQueryBackend`] |
//! | [`SigningBackend`] | messages | supplied by the wallet integration |
//!
//! # Call Builders
//!
//! - [`ContractCall`] — any function, yields [`CallOutput`]
//! - [`QueryCall`] — a query, deserialized into `T`
//! - [`ExecuteCall`] — a message, yields [`ExecuteResult`](crate::ExecuteResult)

mod backend;
mod call;
mod contract;
mod dapp;
mod dispatch;
mod lcd;
mod session;

pub use backend::{QueryBackend, SigningBackend};
pub use call::{ContractCall, ExecuteCall, QueryCall};
pub use contract::{ContractClient, create_contract_client};
pub use dapp::{Config, DApp};
pub use dispatch::CallOutput;
pub use lcd::LcdQueryBackend;
pub use session::{Session, SessionState};
