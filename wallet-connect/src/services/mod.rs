//! Provider access and the connect action

pub mod connector;
pub mod provider;

pub use connector::{ConnectOutcome, StatusLabel, WalletConnector};
pub use provider::{injected_provider, InjectedProvider, WalletProvider};
