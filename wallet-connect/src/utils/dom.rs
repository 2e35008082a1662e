//! DOM glue for pages that already render the connect button

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::config::ConnectorConfig;
use crate::services::connector::{StatusLabel, WalletConnector};
use crate::services::provider::WalletProvider;
use crate::utils::constants::CONFIG_ATTRIBUTES;

/// Text content of an element used as the status label
pub struct DomLabel {
    element: Element,
}

impl DomLabel {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl StatusLabel for DomLabel {
    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Apply the `data-*` overrides present on `element`.
///
/// Bad values are logged and skipped; the default stays in place.
pub fn read_config(element: &Element, config: &mut ConnectorConfig) {
    for name in CONFIG_ATTRIBUTES {
        let Some(value) = element.get_attribute(name) else {
            continue;
        };
        if let Err(e) = config.apply_attribute(name, &value) {
            log::warn!("[CONNECT] Ignoring {}: {}", name, e);
        }
    }
}

/// Wire a [`WalletConnector`] to the click events of `element`.
///
/// The element's own text is the label. The listener lives as long as the page.
pub fn attach_connector(
    element: Element,
    provider: Option<Rc<dyn WalletProvider>>,
    config: ConnectorConfig,
) -> Result<(), JsValue> {
    let connector = Rc::new(WalletConnector::new(provider, DomLabel::new(element.clone()), config));

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let connector = Rc::clone(&connector);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = connector.on_connect_requested().await;
            log::debug!("[CONNECT] Click handled: {:?}", outcome);
        });
    });

    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    log::info!("[CONNECT] Click handler attached to #{}", element.id());
    Ok(())
}
