//! # Error Types
//!
//! [`ConnectError`] is the reason carried by `ConnectionState::Failed`.
//! [`ProviderError`] is what a [`WalletProvider`](crate::services::provider::WalletProvider)
//! rejects with; it converts into `ConnectError` at the connector boundary.
//!
//! Nothing here escapes the click handler: every failure ends up as a
//! `Failed` state plus a label, never as a thrown JS exception.

use shared::dto::wallet::ProviderRpcError;
use thiserror::Error;

/// Why a connect attempt did not reach `Connected`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No injected provider on the page
    #[error("no provider")]
    ProviderMissing,

    /// The user declined the prompt or the provider returned an error
    #[error("request rejected: {0}")]
    ProviderRejected(ProviderError),

    /// The request did not settle within the configured bound
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },

    /// The provider resolved with something other than a list of addresses
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ConnectError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, ConnectError::ProviderRejected(ProviderError::Rpc(rpc)) if rpc.is_user_rejection())
    }
}

/// Errors surfaced by a wallet provider's `request()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Structured EIP-1193 error (`{ code, message }`)
    #[error("{} (code {})", .0.message, .0.code)]
    Rpc(ProviderRpcError),

    /// Anything else thrown on the JS side
    #[error("{0}")]
    Js(String),

    /// The resolved value could not be decoded
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Human-readable reason without the code
    pub fn message(&self) -> &str {
        match self {
            ProviderError::Rpc(rpc) => &rpc.message,
            ProviderError::Js(message) | ProviderError::Decode(message) => message,
        }
    }
}

impl From<ProviderError> for ConnectError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Decode(message) => ConnectError::InvalidResponse(message),
            rejected => ConnectError::ProviderRejected(rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::wallet::USER_REJECTED_REQUEST;

    #[test]
    fn test_rpc_error_becomes_rejection_with_code() {
        let err: ConnectError =
            ProviderError::Rpc(ProviderRpcError::new(USER_REJECTED_REQUEST, "User rejected the request.")).into();

        assert!(err.is_user_rejection());
        assert_eq!(err.to_string(), "request rejected: User rejected the request. (code 4001)");
    }

    #[test]
    fn test_other_rpc_codes_are_not_user_rejections() {
        let err: ConnectError = ProviderError::Rpc(ProviderRpcError::new(-32002, "Request already pending")).into();

        assert!(!err.is_user_rejection());
        assert!(matches!(err, ConnectError::ProviderRejected(_)));
    }

    #[test]
    fn test_js_error_becomes_rejection_without_code() {
        let err: ConnectError = ProviderError::Js("boom".to_string()).into();

        assert_eq!(err, ConnectError::ProviderRejected(ProviderError::Js("boom".to_string())));
        assert_eq!(err.to_string(), "request rejected: boom");
        assert!(!err.is_user_rejection());
    }

    #[test]
    fn test_decode_error_becomes_invalid_response() {
        let err: ConnectError = ProviderError::Decode("expected array".to_string()).into();
        assert_eq!(err, ConnectError::InvalidResponse("expected array".to_string()));
    }

    #[test]
    fn test_message_drops_code() {
        assert_eq!(ProviderError::Rpc(ProviderRpcError::new(4001, "denied")).message(), "denied");
        assert_eq!(ProviderError::Js("thrown".to_string()).message(), "thrown");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(ConnectError::ProviderMissing.to_string(), "no provider");
        assert_eq!(
            ConnectError::Timeout { after_ms: 1500 }.to_string(),
            "request timed out after 1500 ms"
        );
    }
}
