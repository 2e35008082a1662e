use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Method asking the wallet to expose the user's accounts to the page.
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED_REQUEST: i64 = 4001;

/// Arguments for `provider.request(args)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestArguments {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RequestArguments {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    /// `{ method: "eth_requestAccounts" }`
    pub fn request_accounts() -> Self {
        Self::new(ETH_REQUEST_ACCOUNTS)
    }
}

/// Error object a provider rejects its promise with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProviderRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// The user dismissed or declined the wallet prompt.
    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_REQUEST
    }
}
