//! # Data Transfer Objects (DTOs)
//!
//! Structures passed across the JS boundary to the injected wallet provider.
//!
//! - [`wallet`] - `request()` arguments, method names and provider RPC errors
//!
//! All DTOs implement both `Serialize` and `Deserialize`; optional fields are
//! omitted when `None`.

pub mod wallet;

pub use wallet::*;
