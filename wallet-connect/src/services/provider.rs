//! Injected Wallet Provider via wasm-bindgen
//!
//! EIP-1193 providers (MetaMask and friends) inject `window.ethereum` with a
//! single `request({ method, params })` entry point. [`WalletProvider`] is the
//! seam the connector talks to; [`InjectedProvider`] is the browser
//! implementation and tests substitute their own.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Reflect;
use shared::dto::wallet::{ProviderRpcError, RequestArguments};
use wasm_bindgen::prelude::*;

use crate::error::ProviderError;

const UNKNOWN_PROVIDER_ERROR: &str = "unknown provider error";

/// Account-access capability of a wallet provider
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Send `args` and resolve with the account list.
    async fn request(&self, args: &RequestArguments) -> Result<Vec<String>, ProviderError>;
}

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function injectedEthereum() {
    if (typeof window === 'undefined') {
        return null;
    }
    if (typeof window.ethereum === 'undefined' || window.ethereum === null) {
        return null;
    }
    return window.ethereum;
}

export async function requestWithProvider(provider, args) {
    if (typeof provider.request !== 'function') {
        throw new Error('provider does not expose request()');
    }
    return await provider.request(args);
}
")]
extern "C" {
    /// `window.ethereum`, or null when no wallet is installed
    fn injectedEthereum() -> Option<JsValue>;

    /// `await provider.request(args)`
    #[wasm_bindgen(catch)]
    async fn requestWithProvider(provider: &JsValue, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Provider injected by a browser extension
pub struct InjectedProvider {
    inner: JsValue,
}

impl InjectedProvider {
    pub fn detect() -> Option<Self> {
        injectedEthereum().map(|inner| Self { inner })
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    async fn request(&self, args: &RequestArguments) -> Result<Vec<String>, ProviderError> {
        let js_args = serde_wasm_bindgen::to_value(args)
            .map_err(|e| ProviderError::Js(format!("Failed to encode request: {}", e)))?;

        let response = requestWithProvider(&self.inner, js_args)
            .await
            .map_err(provider_error_from_js)?;

        serde_wasm_bindgen::from_value(response).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

/// Map a rejected promise value onto [`ProviderError`].
fn provider_error_from_js(value: JsValue) -> ProviderError {
    let code = Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64());

    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string());

    provider_error_from_parts(code, message)
}

/// EIP-1193 errors carry an integer `code`; anything without one is kept as text.
fn provider_error_from_parts(code: Option<f64>, message: Option<String>) -> ProviderError {
    let message = message.unwrap_or_else(|| UNKNOWN_PROVIDER_ERROR.to_string());

    match code.filter(|c| c.is_finite() && c.fract() == 0.0) {
        Some(code) => ProviderError::Rpc(ProviderRpcError::new(code as i64, message)),
        None => ProviderError::Js(message),
    }
}

/// The page's injected provider, if a wallet extension is installed
pub fn injected_provider() -> Option<Rc<dyn WalletProvider>> {
    let provider = InjectedProvider::detect()?;
    log::debug!("[CONNECT] Injected provider detected");
    Some(Rc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectError;
    use shared::dto::wallet::USER_REJECTED_REQUEST;

    #[test]
    fn test_user_rejection_code_maps_to_rpc_error() {
        let err = provider_error_from_parts(Some(4001.0), Some("User rejected the request.".to_string()));

        assert_eq!(
            err,
            ProviderError::Rpc(ProviderRpcError::new(USER_REJECTED_REQUEST, "User rejected the request."))
        );
        assert!(ConnectError::from(err).is_user_rejection());
    }

    #[test]
    fn test_negative_json_rpc_code_is_kept() {
        let err = provider_error_from_parts(Some(-32002.0), Some("Request already pending".to_string()));

        assert_eq!(err, ProviderError::Rpc(ProviderRpcError::new(-32002, "Request already pending")));
        assert!(!ConnectError::from(err).is_user_rejection());
    }

    #[test]
    fn test_message_without_code_is_js_error() {
        let err = provider_error_from_parts(None, Some("provider does not expose request()".to_string()));
        assert_eq!(err, ProviderError::Js("provider does not expose request()".to_string()));
    }

    #[test]
    fn test_code_without_message_uses_fallback_text() {
        let err = provider_error_from_parts(Some(4001.0), None);
        assert_eq!(err, ProviderError::Rpc(ProviderRpcError::new(4001, UNKNOWN_PROVIDER_ERROR)));
    }

    #[test]
    fn test_nothing_usable_is_unknown_js_error() {
        assert_eq!(
            provider_error_from_parts(None, None),
            ProviderError::Js(UNKNOWN_PROVIDER_ERROR.to_string())
        );
    }

    #[test]
    fn test_non_integer_code_is_not_rpc() {
        assert_eq!(
            provider_error_from_parts(Some(f64::NAN), Some("weird".to_string())),
            ProviderError::Js("weird".to_string())
        );
        assert_eq!(
            provider_error_from_parts(Some(4001.5), Some("weird".to_string())),
            ProviderError::Js("weird".to_string())
        );
    }
}
