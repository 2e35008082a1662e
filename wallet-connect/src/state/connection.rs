//! Connection state and the Leptos context that mirrors it

use leptos::prelude::*;

use crate::error::ConnectError;

/// Lifecycle of a connect attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected { accounts: Vec<String> },
    Failed(ConnectError),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionState::Connecting)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ConnectionState::Failed(_))
    }

    pub fn accounts(&self) -> &[String] {
        match self {
            ConnectionState::Connected { accounts } => accounts,
            _ => &[],
        }
    }

    /// First account the wallet exposed; wallets put the selected one first.
    pub fn primary_account(&self) -> Option<&str> {
        self.accounts().first().map(String::as_str)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected { .. } => "connected",
            ConnectionState::Failed(_) => "failed",
        }
    }

    /// Whether `next` is a legal successor.
    ///
    /// `Connecting` settles only into `Connected` or `Failed`. Every settled
    /// state may start a new attempt, be reset, or fail fast when the
    /// provider is missing.
    pub fn can_transition_to(&self, next: &ConnectionState) -> bool {
        use ConnectionState::*;

        match (self, next) {
            (Connecting, Connected { .. }) | (Connecting, Failed(_)) => true,
            (Connecting, _) => false,
            (_, Connecting) | (_, Disconnected) => true,
            (_, Failed(ConnectError::ProviderMissing)) => true,
            _ => false,
        }
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        ConnectionState::Disconnected
    }
}

/// Reactive mirror of the connector for Leptos views
#[derive(Clone, Copy)]
pub struct ConnectionContext {
    pub state: RwSignal<ConnectionState>,
    pub label: RwSignal<String>,
}

impl ConnectionContext {
    pub fn new(initial_label: impl Into<String>) -> Self {
        Self {
            state: RwSignal::new(ConnectionState::Disconnected),
            label: RwSignal::new(initial_label.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.state.with(|state| state.is_connecting())
    }

    pub fn primary_account(&self) -> Option<String> {
        self.state.with(|state| state.primary_account().map(str::to_string))
    }
}

pub fn provide_connection_context(initial_label: impl Into<String>) -> ConnectionContext {
    let context = ConnectionContext::new(initial_label);
    provide_context(context);
    context
}

pub fn use_connection_context() -> ConnectionContext {
    expect_context::<ConnectionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use shared::dto::wallet::{ProviderRpcError, USER_REJECTED_REQUEST};

    fn connected() -> ConnectionState {
        ConnectionState::Connected {
            accounts: vec![
                "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".to_string(),
            ],
        }
    }

    fn rejected() -> ConnectionState {
        ConnectionState::Failed(ConnectError::ProviderRejected(ProviderError::Rpc(ProviderRpcError::new(
            USER_REJECTED_REQUEST,
            "User rejected the request.",
        ))))
    }

    #[test]
    fn test_default_is_disconnected() {
        assert_eq!(ConnectionState::default(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_accessors() {
        let state = connected();
        assert!(state.is_connected());
        assert_eq!(state.accounts().len(), 2);
        assert_eq!(state.primary_account(), Some("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!state.is_failed());

        let state = rejected();
        assert!(state.is_failed());
        assert!(state.accounts().is_empty());
        assert!(state.primary_account().is_none());
        assert!(matches!(&state, ConnectionState::Failed(err) if err.is_user_rejection()));
    }

    #[test]
    fn test_attempt_path_is_legal() {
        use ConnectionState::*;

        assert!(Disconnected.can_transition_to(&Connecting));
        assert!(Connecting.can_transition_to(&connected()));
        assert!(Connecting.can_transition_to(&rejected()));
    }

    #[test]
    fn test_connecting_only_settles() {
        use ConnectionState::*;

        assert!(!Connecting.can_transition_to(&Connecting));
        assert!(!Connecting.can_transition_to(&Disconnected));
    }

    #[test]
    fn test_settled_states_may_retry() {
        use ConnectionState::*;

        assert!(rejected().can_transition_to(&Connecting));
        assert!(connected().can_transition_to(&Connecting));
        assert!(connected().can_transition_to(&Disconnected));
    }

    #[test]
    fn test_settling_requires_an_attempt() {
        use ConnectionState::*;

        assert!(!Disconnected.can_transition_to(&connected()));
        assert!(!Disconnected.can_transition_to(&rejected()));
        assert!(Disconnected.can_transition_to(&Failed(ConnectError::ProviderMissing)));
        assert!(rejected().can_transition_to(&Failed(ConnectError::ProviderMissing)));
    }
}
