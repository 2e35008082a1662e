//! Application constants

/// Id of the button the page bootstrap renders for us
pub const CONNECT_BUTTON_ID: &str = "btn-connect";

// Label text
pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const CONNECTED_LABEL: &str = "Connected!";
pub const MISSING_PROVIDER_LABEL: &str = "Install a wallet to connect";
pub const REJECTED_LABEL: &str = "Connection rejected";
pub const TIMEOUT_LABEL: &str = "Connection timed out";
pub const FAILED_LABEL: &str = "Connection failed";

// data-* overrides read from the mount element
pub const ATTR_CONNECTED_LABEL: &str = "data-connected-label";
pub const ATTR_MISSING_LABEL: &str = "data-missing-label";
pub const ATTR_CONNECTING_LABEL: &str = "data-connecting-label";
pub const ATTR_TIMEOUT_MS: &str = "data-timeout-ms";

pub const CONFIG_ATTRIBUTES: &[&str] = &[
    ATTR_CONNECTED_LABEL,
    ATTR_MISSING_LABEL,
    ATTR_CONNECTING_LABEL,
    ATTR_TIMEOUT_MS,
];
