//! # Shared Wallet Types
//!
//! Types and helpers shared between the wallet-connect front-end and anything
//! that speaks to an injected EIP-1193 wallet provider.
//!
//! ## Structure
//!
//! - **[`dto`]**: Payloads exchanged with the provider
//!   - **[`dto::wallet`]**: `request()` arguments, method names and RPC errors
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format hex wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Payloads follow the EIP-1193 shape. `RequestArguments` serializes to
//! `{ "method": "...", "params": ... }` with `params` omitted when `None`.
//!
//! ```rust
//! use shared::dto::wallet::RequestArguments;
//!
//! let args = RequestArguments::request_accounts();
//! let json = serde_json::to_string(&args).unwrap();
//! assert_eq!(json, r#"{"method":"eth_requestAccounts"}"#);
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
