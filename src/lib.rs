/// Custom New Tab - Chrome Extension that opens new tabs on a URL of your choice
/// Built with Rust + WASM + Yew

mod background;
mod chrome;
mod classifier;
mod dispatch;
mod error;
mod host;
mod messages;
mod redirect;
mod settings;
mod storage;
mod validation;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the pure URL checks for JavaScript access
#[wasm_bindgen]
pub fn is_new_tab_url(url: &str) -> bool {
    classifier::is_new_tab_url(url)
}

#[wasm_bindgen]
pub fn is_valid_custom_url(url: &str) -> bool {
    validation::validate_custom_url(url).is_ok()
}

// Register the service worker's event listeners
#[wasm_bindgen]
pub fn start_background() {
    background::register_listeners();
}

// Start the Yew app for the settings popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the Yew app for the new tab override page
#[wasm_bindgen]
pub fn start_newtab() {
    yew::Renderer::<ui::newtab::NewTabPage>::new().render();
}
