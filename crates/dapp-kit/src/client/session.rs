//! Session access for contract clients.
//!
//! A [`Session`] tells a client which backends and which account are
//! available *right now*. Clients read it once per call and never cache
//! what it returns, so the session owner may connect, reconnect or switch
//! accounts between calls.

use std::fmt;
use std::sync::Arc;

use crate::types::AccountData;

use super::backend::{QueryBackend, SigningBackend};

/// Read-only view of the connection state a client dispatches through.
pub trait Session: Send + Sync {
    /// The connected query backend, if any.
    fn query_backend(&self) -> Option<Arc<dyn QueryBackend>>;

    /// The connected signing backend, if any.
    fn signing_backend(&self) -> Option<Arc<dyn SigningBackend>>;

    /// The account messages are sent from, if one is established.
    fn active_account(&self) -> Option<AccountData>;
}

impl<T: Session + ?Sized> Session for Arc<T> {
    fn query_backend(&self) -> Option<Arc<dyn QueryBackend>> {
        (**self).query_backend()
    }

    fn signing_backend(&self) -> Option<Arc<dyn SigningBackend>> {
        (**self).signing_backend()
    }

    fn active_account(&self) -> Option<AccountData> {
        (**self).active_account()
    }
}

/// A fixed snapshot of backends and account.
///
/// # Example
///
/// ```rust
/// use dapp_kit::{AccountData, Session, SessionState};
///
/// let session = SessionState::new().with_account(AccountData::new("wasm1caller"));
/// assert!(session.query_backend().is_none());
/// assert_eq!(session.active_account().unwrap().address, "wasm1caller");
/// ```
#[derive(Clone, Default)]
pub struct SessionState {
    pub query: Option<Arc<dyn QueryBackend>>,
    pub signing: Option<Arc<dyn SigningBackend>>,
    pub account: Option<AccountData>,
}

impl SessionState {
    /// An empty session with nothing connected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query backend.
    pub fn with_query_backend(mut self, backend: impl QueryBackend + 'static) -> Self {
        self.query = Some(Arc::new(backend));
        self
    }

    /// Set the signing backend.
    pub fn with_signing_backend(mut self, backend: impl SigningBackend + 'static) -> Self {
        self.signing = Some(Arc::new(backend));
        self
    }

    /// Set the active account.
    pub fn with_account(mut self, account: AccountData) -> Self {
        self.account = Some(account);
        self
    }
}

impl Session for SessionState {
    fn query_backend(&self) -> Option<Arc<dyn QueryBackend>> {
        self.query.clone()
    }

    fn signing_backend(&self) -> Option<Arc<dyn SigningBackend>> {
        self.signing.clone()
    }

    fn active_account(&self) -> Option<AccountData> {
        self.account.clone()
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("query", &self.query.is_some())
            .field("signing", &self.signing.is_some())
            .field("account", &self.account.as_ref().map(|a| &a.address))
            .finish()
    }
}
