/// Bridge to the `chrome.*` extension APIs
use crate::dispatch::MenuItem;
use crate::error::{ExtensionError, Result};
use crate::host::{BrowserHost, SettingsStore};
use crate::messages::Request;
use crate::storage::{SETTINGS_KEYS, StoredSettings};
use serde::Serialize;
use std::time::Duration;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/chrome.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn storageGet(keys: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn storageSet(items: JsValue) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTab(tab_id: i32, url: &str) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(url: &str) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setPopup(popup: &str) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendMessage(message: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    fn createMenuItem(id: &str, title: &str, context: &str) -> std::result::Result<(), JsValue>;
}

/// `chrome.storage.sync`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeStore;

impl SettingsStore for ChromeStore {
    async fn get(&self) -> Result<StoredSettings> {
        let keys = serde_wasm_bindgen::to_value(&SETTINGS_KEYS)?;
        let stored_js = storageGet(keys).await.map_err(ExtensionError::storage)?;

        if stored_js.is_null() || stored_js.is_undefined() {
            Ok(StoredSettings::default())
        } else {
            Ok(serde_wasm_bindgen::from_value(stored_js)?)
        }
    }

    async fn set(&self, patch: &StoredSettings) -> Result<()> {
        let items = serde_wasm_bindgen::to_value(patch)?;
        storageSet(items).await.map_err(ExtensionError::storage)
    }
}

/// `chrome.tabs`, `chrome.action`, `chrome.contextMenus` and `chrome.runtime`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeHost;

impl BrowserHost for ChromeHost {
    async fn update_tab(&self, tab_id: i32, url: &str) -> Result<()> {
        updateTab(tab_id, url).await.map_err(ExtensionError::tabs)
    }

    async fn create_tab(&self, url: &str) -> Result<()> {
        createTab(url).await.map_err(ExtensionError::tabs)
    }

    async fn set_popup(&self, popup: &str) -> Result<()> {
        setPopup(popup).await.map_err(ExtensionError::action)
    }

    async fn open_options_page(&self) -> Result<()> {
        openOptionsPage().await.map_err(ExtensionError::runtime)
    }

    async fn create_menu_item(&self, item: MenuItem) -> Result<()> {
        createMenuItem(item.id(), item.title(), MenuItem::CONTEXT).map_err(ExtensionError::action)
    }

    async fn sleep(&self, delay: Duration) {
        yew::platform::time::sleep(delay).await;
    }
}


/// Send a request to the background worker and wait for its response
pub async fn send_message(request: &Request) -> Result<JsValue> {
    let message = request.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
    sendMessage(message).await.map_err(ExtensionError::runtime)
}
