//! Wallet Connect Helper
//!
//! Wires a single "connect" button to the EIP-1193 provider a wallet
//! extension injects as `window.ethereum`, and reflects the outcome in the
//! button's label.
//!
//! The connect logic lives in [`services::connector::WalletConnector`] and is
//! independent of the DOM; [`utils::dom`] and [`components`] adapt it to an
//! existing element or to a Leptos view.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod utils;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("[CONNECT] Wallet connect helper loaded");
    app::start();
}
