//! Connect Button Component
//!
//! Leptos rendition of the connect button for pages that do not ship their
//! own `#btn-connect`. State and label are mirrored into the
//! [`ConnectionContext`](crate::state::ConnectionContext) signals.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ConnectorConfig;
use crate::services::connector::{StatusLabel, WalletConnector};
use crate::services::provider::WalletProvider;
use crate::state::connection::use_connection_context;

/// Status label backed by a signal
#[derive(Clone, Copy)]
pub struct SignalLabel(pub RwSignal<String>);

impl StatusLabel for SignalLabel {
    fn text(&self) -> String {
        self.0.get_untracked()
    }

    fn set_text(&self, text: &str) {
        self.0.set(text.to_string());
    }
}

#[component]
pub fn ConnectButton(provider: Option<Rc<dyn WalletProvider>>, config: ConnectorConfig) -> impl IntoView {
    let ctx = use_connection_context();
    let button_id = config.button_id.clone();

    let state = ctx.state;
    let connector = WalletConnector::new(provider, SignalLabel(ctx.label), config)
        .with_observer(move |next| state.set(next.clone()));
    let connector = StoredValue::new_local(Rc::new(connector));

    let on_connect = move |_| {
        let connector = connector.get_value();
        leptos::task::spawn_local(async move {
            let outcome = connector.on_connect_requested().await;
            log::debug!("[CONNECT] Click handled: {:?}", outcome);
        });
    };

    let on_disconnect = move |_| {
        connector.with_value(|connector| {
            connector.disconnect();
        });
    };

    view! {
        <div class="wallet-actions">
            <button
                id=button_id
                class="btn wallet-button"
                disabled=move || ctx.is_connecting()
                on:click=on_connect
            >
                {move || ctx.label.get()}
            </button>

            {move || ctx.is_connected().then(|| view! {
                <button class="btn btn-secondary" on:click=on_disconnect>
                    "Disconnect"
                </button>
            })}
        </div>
    }
}
