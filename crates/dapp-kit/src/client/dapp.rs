//! The DApp session owner.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::contract::{Contract, TypedClient};
use crate::definition::ContractDefinition;
use crate::error::Error;
use crate::types::AccountData;

use super::backend::{QueryBackend, SigningBackend};
use super::contract::ContractClient;
use super::lcd::LcdQueryBackend;
use super::session::{Session, SessionState};

/// Chain connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Chain identifier, e.g. `"malaga-420"`.
    pub chain_id: String,
    /// Endpoint queries are sent to.
    pub rpc_endpoint: String,
    /// Bech32 address prefix, e.g. `"wasm"`.
    pub prefix: String,
}

impl Config {
    pub fn new(
        chain_id: impl Into<String>,
        rpc_endpoint: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            rpc_endpoint: rpc_endpoint.into(),
            prefix: prefix.into(),
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// - `DAPP_CHAIN_ID`
    /// - `DAPP_RPC_ENDPOINT`
    /// - `DAPP_PREFIX`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first variable that is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, using the same keys as
    /// [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let require = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{} is not set", key)))
        };

        Ok(Self {
            chain_id: require("DAPP_CHAIN_ID")?,
            rpc_endpoint: require("DAPP_RPC_ENDPOINT")?,
            prefix: require("DAPP_PREFIX")?,
        })
    }
}

type EntryPoint = Arc<dyn Fn() + Send + Sync>;

struct Inner {
    config: Config,
    state: RwLock<SessionState>,
    entry_point: RwLock<Option<EntryPoint>>,
}

/// Owns the connection state that contract clients dispatch through.
///
/// Clients created from a `DApp` read its current backends on every call,
/// so connecting after a client was created is fine.
///
/// # Example
///
/// ```rust,no_run
/// use dapp_kit::*;
///
/// # fn example(wallet: impl SigningBackend + 'static) -> Result<(), Error> {
/// let dapp = DApp::new(Config::new("malaga-420", "https://lcd.example.com", "wasm"));
/// dapp.set_entry_point(|| println!("ready"));
/// dapp.connect_with_signer(wallet, AccountData::new("wasm1alice"));
///
/// let definition = ContractDefinition::new()
///     .message("increment", |_, _| WirePayload::empty("increment"))
///     .define()?;
/// let counter = dapp.contract("wasm1counter", &definition);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DApp {
    inner: Arc<Inner>,
}

impl DApp {
    /// Create a disconnected DApp.
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                state: RwLock::new(SessionState::default()),
                entry_point: RwLock::new(None),
            }),
        }
    }

    /// Create a disconnected DApp configured from the environment.
    ///
    /// See [`Config::from_env`].
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Use `backend` for queries instead of the configured gateway.
    pub fn with_query_backend(self, backend: impl QueryBackend + 'static) -> Self {
        self.write_state().query = Some(Arc::new(backend));
        self
    }

    /// Attach a signing backend and its account.
    pub fn with_signer(
        self,
        backend: impl SigningBackend + 'static,
        account: AccountData,
    ) -> Self {
        {
            let mut state = self.write_state();
            state.signing = Some(Arc::new(backend));
            state.account = Some(account);
        }
        self
    }

    /// The configuration this DApp was created with.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Register a callback run after every successful connect.
    pub fn set_entry_point(&self, entry_point: impl Fn() + Send + Sync + 'static) {
        *self
            .inner
            .entry_point
            .write()
            .unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(entry_point));
    }

    /// Connect for queries.
    ///
    /// Uses an [`LcdQueryBackend`] for the configured endpoint unless a query
    /// backend is already attached, then runs the entry point.
    pub fn connect(&self) {
        {
            let mut state = self.write_state();
            if state.query.is_none() {
                state.query = Some(Arc::new(LcdQueryBackend::new(
                    self.inner.config.rpc_endpoint.as_str(),
                )));
            }
        }

        tracing::info!(
            chain_id = %self.inner.config.chain_id,
            endpoint = %self.inner.config.rpc_endpoint,
            "connected"
        );
        self.run_entry_point();
    }

    /// Connect for queries and messages.
    ///
    /// Attaches `backend` as the signer for `account`, then behaves like
    /// [`connect`](Self::connect).
    pub fn connect_with_signer(
        &self,
        backend: impl SigningBackend + 'static,
        account: AccountData,
    ) {
        {
            let mut state = self.write_state();
            state.signing = Some(Arc::new(backend));
            tracing::info!(account = %account.address, "signer attached");
            state.account = Some(account);
        }
        self.connect();
    }

    /// Drop all backends and the active account.
    pub fn disconnect(&self) {
        *self.write_state() = SessionState::default();
        tracing::info!(chain_id = %self.inner.config.chain_id, "disconnected");
    }

    /// Returns true if queries can be dispatched.
    pub fn is_connected(&self) -> bool {
        self.read_state().query.is_some()
    }

    /// Create a client for `address` dispatching through this DApp.
    pub fn contract(
        &self,
        address: impl Into<String>,
        definition: &ContractDefinition,
    ) -> ContractClient {
        ContractClient::new(address, definition, Arc::new(self.clone()))
    }

    /// Create a typed client for a `#[dapp_kit::contract]` interface.
    ///
    /// ```ignore
    /// let counter = dapp.typed::<dyn Counter>("wasm1counter");
    /// let count = counter.get_count().await?;
    /// ```
    pub fn typed<C: Contract + ?Sized>(&self, address: impl Into<String>) -> C::Client {
        C::Client::from_client(self.contract(address, &C::definition()))
    }

    fn run_entry_point(&self) {
        let entry_point = self
            .inner
            .entry_point
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(entry_point) = entry_point {
            entry_point();
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Session for DApp {
    fn query_backend(&self) -> Option<Arc<dyn QueryBackend>> {
        self.read_state().query.clone()
    }

    fn signing_backend(&self) -> Option<Arc<dyn SigningBackend>> {
        self.read_state().signing.clone()
    }

    fn active_account(&self) -> Option<AccountData> {
        self.read_state().account.clone()
    }
}

impl fmt::Debug for DApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DApp")
            .field("config", &self.inner.config)
            .field("state", &*self.read_state())
            .finish()
    }
}
