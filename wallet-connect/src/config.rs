//! # Connector Configuration
//!
//! Defaults come from [`crate::utils::constants`]. A page can override them
//! with `data-*` attributes on the mount element:
//!
//! ```html
//! <button id="btn-connect" data-timeout-ms="30000" data-connecting-label="Waiting...">
//!     Connect
//! </button>
//! ```
//!
//! Unknown attributes and malformed values are reported as [`ConfigError`]
//! and leave the previous value in place.

use thiserror::Error;

use crate::error::ConnectError;
use crate::utils::constants::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown config attribute: {0}")]
    UnknownAttribute(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Element the click handler attaches to
    pub button_id: String,

    /// Label after a successful attempt
    pub connected_label: String,

    /// Label when no provider is injected
    pub missing_provider_label: String,

    /// Optional label shown while the request is outstanding.
    /// `None` keeps the label untouched until the attempt settles.
    pub connecting_label: Option<String>,

    /// Optional bound on the provider request. `None` waits forever.
    pub request_timeout_ms: Option<u32>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            button_id: CONNECT_BUTTON_ID.to_string(),
            connected_label: CONNECTED_LABEL.to_string(),
            missing_provider_label: MISSING_PROVIDER_LABEL.to_string(),
            connecting_label: None,
            request_timeout_ms: None,
        }
    }
}

impl ConnectorConfig {
    /// Apply one `data-*` attribute.
    ///
    /// Blank connecting labels and a `0`/blank timeout switch the feature off.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let trimmed = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: name.to_string(),
            value: value.to_string(),
        };

        match name {
            ATTR_CONNECTED_LABEL => {
                if trimmed.is_empty() {
                    return Err(invalid());
                }
                self.connected_label = trimmed.to_string();
            }
            ATTR_MISSING_LABEL => {
                if trimmed.is_empty() {
                    return Err(invalid());
                }
                self.missing_provider_label = trimmed.to_string();
            }
            ATTR_CONNECTING_LABEL => {
                self.connecting_label = (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            ATTR_TIMEOUT_MS => {
                if trimmed.is_empty() {
                    self.request_timeout_ms = None;
                    return Ok(());
                }
                let ms: u32 = trimmed.parse().map_err(|_| invalid())?;
                self.request_timeout_ms = (ms > 0).then_some(ms);
            }
            other => return Err(ConfigError::UnknownAttribute(other.to_string())),
        }

        Ok(())
    }

    /// Label text for a failed attempt
    pub fn label_for(&self, err: &ConnectError) -> String {
        match err {
            ConnectError::ProviderMissing => self.missing_provider_label.clone(),
            ConnectError::ProviderRejected(_) if err.is_user_rejection() => REJECTED_LABEL.to_string(),
            ConnectError::ProviderRejected(reason) => format!("{}: {}", FAILED_LABEL, reason.message()),
            ConnectError::Timeout { .. } => TIMEOUT_LABEL.to_string(),
            ConnectError::InvalidResponse(_) => FAILED_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use shared::dto::wallet::ProviderRpcError;

    #[test]
    fn test_defaults() {
        let config = ConnectorConfig::default();

        assert_eq!(config.button_id, "btn-connect");
        assert_eq!(config.connected_label, "Connected!");
        assert!(config.connecting_label.is_none());
        assert!(config.request_timeout_ms.is_none());
    }

    #[test]
    fn test_apply_labels() {
        let mut config = ConnectorConfig::default();

        config.apply_attribute(ATTR_CONNECTED_LABEL, " Linked ").unwrap();
        config.apply_attribute(ATTR_MISSING_LABEL, "Get MetaMask").unwrap();
        config.apply_attribute(ATTR_CONNECTING_LABEL, "Waiting...").unwrap();

        assert_eq!(config.connected_label, "Linked");
        assert_eq!(config.missing_provider_label, "Get MetaMask");
        assert_eq!(config.connecting_label.as_deref(), Some("Waiting..."));

        config.apply_attribute(ATTR_CONNECTING_LABEL, "  ").unwrap();
        assert!(config.connecting_label.is_none());
    }

    #[test]
    fn test_blank_required_label_rejected() {
        let mut config = ConnectorConfig::default();

        let err = config.apply_attribute(ATTR_CONNECTED_LABEL, "").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(config.connected_label, CONNECTED_LABEL);
    }

    #[test]
    fn test_apply_timeout() {
        let mut config = ConnectorConfig::default();

        config.apply_attribute(ATTR_TIMEOUT_MS, "30000").unwrap();
        assert_eq!(config.request_timeout_ms, Some(30_000));

        config.apply_attribute(ATTR_TIMEOUT_MS, "0").unwrap();
        assert_eq!(config.request_timeout_ms, None);

        config.apply_attribute(ATTR_TIMEOUT_MS, "250").unwrap();
        let err = config.apply_attribute(ATTR_TIMEOUT_MS, "soon").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: ATTR_TIMEOUT_MS.to_string(), value: "soon".to_string() }
        );
        assert_eq!(config.request_timeout_ms, Some(250));
    }

    #[test]
    fn test_unknown_attribute() {
        let mut config = ConnectorConfig::default();
        assert_eq!(
            config.apply_attribute("data-chain-id", "1"),
            Err(ConfigError::UnknownAttribute("data-chain-id".to_string()))
        );
    }

    #[test]
    fn test_failure_labels() {
        let config = ConnectorConfig::default();

        assert_eq!(config.label_for(&ConnectError::ProviderMissing), MISSING_PROVIDER_LABEL);
        assert_eq!(
            config.label_for(&ConnectError::ProviderRejected(ProviderError::Rpc(ProviderRpcError::new(4001, "denied")))),
            REJECTED_LABEL
        );
        assert_eq!(
            config.label_for(&ConnectError::ProviderRejected(ProviderError::Rpc(ProviderRpcError::new(-32603, "internal")))),
            "Connection failed: internal"
        );
        assert_eq!(config.label_for(&ConnectError::Timeout { after_ms: 10 }), TIMEOUT_LABEL);
        assert_eq!(config.label_for(&ConnectError::InvalidResponse("x".into())), FAILED_LABEL);
    }
}
