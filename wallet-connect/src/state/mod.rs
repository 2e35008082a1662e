//! Connection state

pub mod connection;

pub use connection::{ConnectionContext, ConnectionState};
