//! Core types shared by definitions, clients and backends.

mod coin;
mod context;
mod execute;
mod payload;

pub use coin::{Coin, Fee, StdFee};
pub use context::{AccountData, CallContext, ExecutionOptions};
pub use execute::{Attribute, Event, ExecuteResult};
pub use payload::{Params, WirePayload};
