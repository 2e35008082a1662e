//! Wallet Connect Web App
//!
//! Either wires the page's own `#btn-connect` or, when the page has none,
//! mounts a Leptos [`App`] that renders one.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::{ConnectButton, ConnectionStatus};
use crate::config::ConnectorConfig;
use crate::services::provider::{injected_provider, WalletProvider};
use crate::state::connection::provide_connection_context;
use crate::utils::constants::CONNECT_LABEL;
use crate::utils::dom;

/// Attach to the page once the module has loaded.
pub fn start() {
    let provider = injected_provider();
    if provider.is_none() {
        log::warn!("[CONNECT] window.ethereum not found; clicks will ask the user to install a wallet");
    }

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("[CONNECT] No document available");
        return;
    };

    let mut config = ConnectorConfig::default();
    match document.get_element_by_id(&config.button_id) {
        Some(element) => {
            dom::read_config(&element, &mut config);
            if let Err(e) = dom::attach_connector(element, provider, config) {
                log::error!("[CONNECT] Failed to attach click handler: {:?}", e);
            }
        }
        None => {
            log::info!("[CONNECT] #{} not on page, mounting ConnectButton", config.button_id);
            leptos::mount::mount_to_body(move || view! { <App provider=provider config=config/> });
        }
    }
}

#[component]
pub fn App(provider: Option<Rc<dyn WalletProvider>>, config: ConnectorConfig) -> impl IntoView {
    provide_connection_context(CONNECT_LABEL);

    view! {
        <div class="app-container">
            <div class="card">
                <h1 class="card-title">"Connect Wallet"</h1>
                <ConnectButton provider=provider config=config/>
                <ConnectionStatus/>
            </div>
        </div>
    }
}
