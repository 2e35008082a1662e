//! # Wallet Connector
//!
//! Owns the "connect" action and the status label next to it.
//!
//! ## Attempt Flow
//!
//! ```text
//! click ──► provider present? ──no──► Failed(ProviderMissing), label = install hint
//!                 │
//!                yes
//!                 ▼
//!            Connecting ──► request({ method: "eth_requestAccounts" })
//!                 │
//!        ┌────────┴────────┐
//!     resolved          rejected / timed out
//!        ▼                  ▼
//!   Connected,          Failed(reason),
//!   label = "Connected!"  label = failure text
//! ```
//!
//! ## Re-entrancy
//!
//! A click while an attempt is outstanding is ignored and reported as
//! [`ConnectOutcome::AlreadyConnecting`], so at most one request is ever in
//! flight. Settled attempts (`Connected` or `Failed`) may be retried.
//!
//! A timed-out attempt ends as `Failed(Timeout)` but its provider request is
//! kept, not dropped: the wallet prompt is still open. Clicks keep being
//! ignored until that request settles.
//!
//! ## Accepted Responses
//!
//! The provider must resolve with at least one `0x`-prefixed 20-byte hex
//! address. An empty list or any other string ends as
//! `Failed(InvalidResponse)`.
//!
//! ## Label Mutations
//!
//! Exactly one label write per settled attempt. The optional
//! `connecting_label` adds one write when the attempt starts.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use shared::dto::wallet::RequestArguments;
use shared::utils::is_hex_address;

use crate::config::ConnectorConfig;
use crate::error::{ConnectError, ProviderError};
use crate::services::provider::WalletProvider;
use crate::state::ConnectionState;
use crate::utils::timer;


/// Where the status text goes (a DOM element, a Leptos signal, a test recorder)
pub trait StatusLabel {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// Result of a single `on_connect_requested` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(Vec<String>),
    Failed(ConnectError),
    /// Another attempt was still outstanding; nothing was sent.
    AlreadyConnecting,
}

type Observer = Box<dyn Fn(&ConnectionState)>;

type PendingRequest = LocalBoxFuture<'static, Result<Vec<String>, ProviderError>>;

pub struct WalletConnector<L: StatusLabel> {
    provider: Option<Rc<dyn WalletProvider>>,
    label: L,
    config: ConnectorConfig,
    state: RefCell<ConnectionState>,
    /// Label text captured at mount, restored on disconnect
    idle_label: String,
    observer: Option<Observer>,
    /// Provider request abandoned by a timeout and not yet settled
    abandoned: RefCell<Option<PendingRequest>>,
}

impl<L: StatusLabel> WalletConnector<L> {
    pub fn new(provider: Option<Rc<dyn WalletProvider>>, label: L, config: ConnectorConfig) -> Self {
        let idle_label = label.text();

        Self {
            provider,
            label,
            config,
            state: RefCell::new(ConnectionState::Disconnected),
            idle_label,
            observer: None,
            abandoned: RefCell::new(None),
        }
    }

    /// Call `observer` after every state change.
    pub fn with_observer(mut self, observer: impl Fn(&ConnectionState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Click handler: request account access and reflect the outcome.
    ///
    /// Never fails; every error ends as `ConnectionState::Failed`.
    pub async fn on_connect_requested(&self) -> ConnectOutcome {
        if self.state.borrow().is_connecting() {
            log::debug!("[CONNECT] Request already outstanding, ignoring click");
            return ConnectOutcome::AlreadyConnecting;
        }
        if self.abandoned_request_pending() {
            log::debug!("[CONNECT] Timed-out request still open in the wallet, ignoring click");
            return ConnectOutcome::AlreadyConnecting;
        }

        let Some(provider) = self.provider.clone() else {
            log::warn!("[CONNECT] No wallet provider injected");
            let err = ConnectError::ProviderMissing;
            self.transition(ConnectionState::Failed(err.clone()));
            self.label.set_text(&self.config.missing_provider_label);
            return ConnectOutcome::Failed(err);
        };

        self.transition(ConnectionState::Connecting);
        if let Some(text) = &self.config.connecting_label {
            self.label.set_text(text);
        }

        match self.request_accounts(provider).await {
            Ok(accounts) => {
                log::info!("[CONNECT] Connected with {} account(s)", accounts.len());
                self.transition(ConnectionState::Connected { accounts: accounts.clone() });
                self.label.set_text(&self.config.connected_label);
                ConnectOutcome::Connected(accounts)
            }
            Err(err) => {
                log::warn!("[CONNECT] Connect attempt failed: {}", err);
                self.transition(ConnectionState::Failed(err.clone()));
                self.label.set_text(&self.config.label_for(&err));
                ConnectOutcome::Failed(err)
            }
        }
    }

    /// Forget the connection and restore the original label.
    ///
    /// Returns `false` (and does nothing) while an attempt is outstanding.
    pub fn disconnect(&self) -> bool {
        if self.state.borrow().is_connecting() {
            log::debug!("[CONNECT] Disconnect ignored while connecting");
            return false;
        }

        self.transition(ConnectionState::Disconnected);
        self.label.set_text(&self.idle_label);
        true
    }

    async fn request_accounts(&self, provider: Rc<dyn WalletProvider>) -> Result<Vec<String>, ConnectError> {
        let args = RequestArguments::request_accounts();
        log::debug!("[CONNECT] Sending {}", args.method);

        let request: PendingRequest = Box::pin(async move { provider.request(&args).await });
        let response = match self.config.request_timeout_ms {
            Some(after_ms) => {
                let deadline = Box::pin(timer::sleep(after_ms));
                match future::select(request, deadline).await {
                    Either::Left((response, _)) => response,
                    Either::Right((_, request)) => {
                        *self.abandoned.borrow_mut() = Some(request);
                        return Err(ConnectError::Timeout { after_ms });
                    }
                }
            }
            None => request.await,
        };

        let accounts = response?;
        if accounts.is_empty() {
            return Err(ConnectError::InvalidResponse("no accounts authorised".to_string()));
        }
        if let Some(bad) = accounts.iter().find(|account| !is_hex_address(account)) {
            return Err(ConnectError::InvalidResponse(format!("not an address: {}", bad)));
        }

        Ok(accounts)
    }

    /// Poll the timed-out request once; `true` while the provider has not answered it.
    fn abandoned_request_pending(&self) -> bool {
        let mut slot = self.abandoned.borrow_mut();
        let Some(request) = slot.as_mut() else {
            return false;
        };

        match request.as_mut().now_or_never() {
            Some(late) => {
                log::debug!("[CONNECT] Timed-out request settled late: {:?}", late.is_ok());
                *slot = None;
                false
            }
            None => true,
        }
    }

    fn transition(&self, next: ConnectionState) {
        {
            let mut state = self.state.borrow_mut();
            if !state.can_transition_to(&next) {
                log::warn!("[CONNECT] Unexpected transition {} -> {}", state.name(), next.name());
            }
            log::debug!("[CONNECT] {} -> {}", state.name(), next.name());
            *state = next.clone();
        }

        if let Some(observer) = &self.observer {
            observer(&next);
        }
    }
}
