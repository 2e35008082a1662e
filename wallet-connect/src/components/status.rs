//! Connection Status Line - account or failure detail under the button

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::state::connection::{use_connection_context, ConnectionState};

#[component]
pub fn ConnectionStatus() -> impl IntoView {
    let ctx = use_connection_context();

    let detail = move || {
        ctx.state.with(|state| match state {
            ConnectionState::Disconnected => String::new(),
            ConnectionState::Connecting => "Check your wallet to approve the request".to_string(),
            ConnectionState::Connected { .. } => state
                .primary_account()
                .map(truncate_address)
                .unwrap_or_default(),
            ConnectionState::Failed(err) => err.to_string(),
        })
    };

    view! {
        <p
            class="wallet-status"
            class:error=move || ctx.state.with(ConnectionState::is_failed)
            title=move || ctx.primary_account().unwrap_or_default()
        >
            {detail}
        </p>
    }
}
