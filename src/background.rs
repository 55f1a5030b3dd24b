/// Background service worker: wires Chrome events to the handlers
use crate::chrome::{ChromeHost, ChromeStore};
use crate::dispatch::{
    handle_icon_click, handle_installed, handle_menu_click, handle_settings_changed,
    sync_popup_from_store,
};
use crate::messages::{Request, handle_message};
use crate::redirect::handle_tab_created;
use crate::settings::TabEvent;
use crate::storage::SettingsChanges;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

// Import JS listener hooks
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    fn onInstalled(callback: &Closure<dyn FnMut()>);

    fn onTabCreated(callback: &Closure<dyn FnMut(JsValue)>);

    fn onMessage(callback: &Closure<dyn FnMut(JsValue) -> JsValue>);

    fn onActionClicked(callback: &Closure<dyn FnMut()>);

    fn onStorageChanged(callback: &Closure<dyn FnMut(JsValue, String)>);

    fn onMenuClicked(callback: &Closure<dyn FnMut(String)>);
}

/// Register every background listener and refresh the popup mirror.
///
/// Closures are leaked: listeners live as long as the worker.
pub fn register_listeners() {
    let on_installed = Closure::wrap(Box::new(move || {
        spawn_local(async move {
            handle_installed(&ChromeStore, &ChromeHost).await;
        });
    }) as Box<dyn FnMut()>);
    onInstalled(&on_installed);
    on_installed.forget();

    let on_tab_created = Closure::wrap(Box::new(move |tab_js: JsValue| {
        match serde_wasm_bindgen::from_value::<TabEvent>(tab_js) {
            Ok(tab) => spawn_local(async move {
                handle_tab_created(&ChromeStore, &ChromeHost, &tab).await;
            }),
            Err(e) => warn!("Failed to parse created tab: {:?}", e),
        }
    }) as Box<dyn FnMut(JsValue)>);
    onTabCreated(&on_tab_created);
    on_tab_created.forget();

    let on_message = Closure::wrap(Box::new(move |message_js: JsValue| -> JsValue {
        match serde_wasm_bindgen::from_value::<Request>(message_js) {
            Ok(request) => future_to_promise(async move {
                let response = handle_message(&ChromeStore, &ChromeHost, request).await;
                response
                    .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                    .map_err(JsValue::from)
            })
            .into(),
            Err(e) => {
                debug!("Ignoring unrecognised message: {:?}", e);
                JsValue::UNDEFINED
            }
        }
    }) as Box<dyn FnMut(JsValue) -> JsValue>);
    onMessage(&on_message);
    on_message.forget();

    let on_action_clicked = Closure::wrap(Box::new(move || {
        spawn_local(async move {
            handle_icon_click(&ChromeStore, &ChromeHost).await;
        });
    }) as Box<dyn FnMut()>);
    onActionClicked(&on_action_clicked);
    on_action_clicked.forget();

    let on_storage_changed = Closure::wrap(Box::new(move |changes_js: JsValue, area: String| {
        match serde_wasm_bindgen::from_value::<SettingsChanges>(changes_js) {
            Ok(changes) => spawn_local(async move {
                handle_settings_changed(&ChromeHost, &changes, &area).await;
            }),
            Err(e) => debug!("Ignoring storage change in {}: {:?}", area, e),
        }
    }) as Box<dyn FnMut(JsValue, String)>);
    onStorageChanged(&on_storage_changed);
    on_storage_changed.forget();

    let on_menu_clicked = Closure::wrap(Box::new(move |menu_item_id: String| {
        spawn_local(async move {
            handle_menu_click(&ChromeStore, &ChromeHost, &menu_item_id).await;
        });
    }) as Box<dyn FnMut(String)>);
    onMenuClicked(&on_menu_clicked);
    on_menu_clicked.forget();

    spawn_local(async move {
        sync_popup_from_store(&ChromeStore, &ChromeHost).await;
    });
}
