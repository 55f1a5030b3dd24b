/// Action icon, context menu and lifecycle handlers
use crate::host::{BrowserHost, SettingsStore};
use crate::redirect::load_settings;
use crate::storage::{STORAGE_AREA, SettingsChanges};
use log::{debug, info, warn};

/// Popup page shown when the icon is clicked in settings mode
pub const POPUP_PAGE: &str = "popup.html";

/// Context menu entries on the extension icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    OpenSettings,
    OpenCustomUrl,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::OpenSettings, MenuItem::OpenCustomUrl];

    /// Menu context the items are registered in
    pub const CONTEXT: &'static str = "action";

    pub fn id(self) -> &'static str {
        match self {
            MenuItem::OpenSettings => "openSettings",
            MenuItem::OpenCustomUrl => "openCustomUrl",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MenuItem::OpenSettings => "Open Settings",
            MenuItem::OpenCustomUrl => "Open Custom URL",
        }
    }

    pub fn from_id(id: &str) -> Option<MenuItem> {
        MenuItem::ALL.into_iter().find(|item| item.id() == id)
    }
}

/// Popup path for the icon-click preference: no popup means clicks reach
/// `action.onClicked` and open the custom URL directly
pub fn popup_for(open_on_icon_click: bool) -> &'static str {
    if open_on_icon_click { "" } else { POPUP_PAGE }
}

/// Mirror the icon-click preference into the action's popup
pub async fn sync_popup<H: BrowserHost>(host: &H, open_on_icon_click: bool) {
    if let Err(e) = host.set_popup(popup_for(open_on_icon_click)).await {
        warn!("Failed to update popup: {}", e);
    }
}

/// Refresh the popup mirror from storage (extension start)
pub async fn sync_popup_from_store<S, H>(store: &S, host: &H)
where
    S: SettingsStore,
    H: BrowserHost,
{
    let settings = load_settings(store).await;
    sync_popup(host, settings.open_on_icon_click).await;
}

async fn open_custom_url<S, H>(store: &S, host: &H)
where
    S: SettingsStore,
    H: BrowserHost,
{
    let settings = load_settings(store).await;
    if settings.custom_url.is_empty() {
        return;
    }
    if let Err(e) = host.create_tab(&settings.custom_url).await {
        warn!("Failed to open {}: {}", settings.custom_url, e);
    }
}

/// Handle `action.onClicked`, which only fires while no popup is set
pub async fn handle_icon_click<S, H>(store: &S, host: &H)
where
    S: SettingsStore,
    H: BrowserHost,
{
    debug!("Icon clicked, opening custom URL");
    open_custom_url(store, host).await;
}

/// Handle `contextMenus.onClicked`; unknown ids are ignored
pub async fn handle_menu_click<S, H>(store: &S, host: &H, menu_item_id: &str)
where
    S: SettingsStore,
    H: BrowserHost,
{
    match MenuItem::from_id(menu_item_id) {
        Some(MenuItem::OpenSettings) => {
            if let Err(e) = host.open_options_page().await {
                warn!("Failed to open settings: {}", e);
            }
        }
        Some(MenuItem::OpenCustomUrl) => open_custom_url(store, host).await,
        None => debug!("Ignoring unknown menu item {}", menu_item_id),
    }
}

/// Handle `runtime.onInstalled`: seed missing defaults, set the popup and
/// register the context menu
pub async fn handle_installed<S, H>(store: &S, host: &H)
where
    S: SettingsStore,
    H: BrowserHost,
{
    // Without a successful read we can't tell missing keys from saved ones
    match store.get().await {
        Ok(stored) => {
            let defaults = stored.missing_defaults();
            if !defaults.is_empty() {
                info!("Seeding default settings: {:?}", defaults);
                if let Err(e) = store.set(&defaults).await {
                    warn!("Failed to seed default settings: {}", e);
                }
            }
            sync_popup(host, stored.open_on_icon_click.unwrap_or(false)).await;
        }
        Err(e) => warn!("Failed to read settings on install, not seeding defaults: {}", e),
    }

    for item in MenuItem::ALL {
        if let Err(e) = host.create_menu_item(item).await {
            warn!("Failed to create menu item {}: {}", item.id(), e);
        }
    }
}

/// Handle `storage.onChanged`: keep the popup mirror in step with storage
pub async fn handle_settings_changed<H: BrowserHost>(
    host: &H,
    changes: &SettingsChanges,
    area: &str,
) {
    if area != STORAGE_AREA {
        return;
    }
    if let Some(change) = &changes.custom_url {
        debug!("customUrl changed: {:?} -> {:?}", change.old_value, change.new_value);
    }
    if let Some(change) = &changes.is_enabled {
        debug!("isEnabled changed: {:?} -> {:?}", change.old_value, change.new_value);
    }
    if let Some(change) = &changes.open_on_icon_click {
        debug!("openOnIconClick changed: {:?} -> {:?}", change.old_value, change.new_value);
        sync_popup(host, change.new_value.unwrap_or(false)).await;
    }
}
