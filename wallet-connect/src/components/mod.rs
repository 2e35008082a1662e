//! UI Components

pub mod connect_button;
pub mod status;

pub use connect_button::{ConnectButton, SignalLabel};
pub use status::ConnectionStatus;
