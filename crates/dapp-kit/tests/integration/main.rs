//! Integration tests for dapp-kit.
//!
//! These tests drive contract clients against recording in-memory backends.
//!
//! Run with: `cargo test --test integration`
//! Set `RUST_LOG=dapp_kit=debug` to see dispatch logs.


mod dispatch_integration;
mod typed_contract_integration;
