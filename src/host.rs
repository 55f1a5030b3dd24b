/// Capabilities the background logic needs from the browser.
///
/// The Chrome implementations live in `chrome`; tests use in-memory fakes.
use crate::dispatch::MenuItem;
use crate::error::Result;
use crate::storage::StoredSettings;
use std::time::Duration;

/// Persistent key-value settings storage
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    /// Read every settings key; missing keys come back as `None`
    async fn get(&self) -> Result<StoredSettings>;

    /// Write the keys present in `patch`
    async fn set(&self, patch: &StoredSettings) -> Result<()>;
}

/// Tab, action and runtime APIs
#[allow(async_fn_in_trait)]
pub trait BrowserHost {
    async fn update_tab(&self, tab_id: i32, url: &str) -> Result<()>;

    async fn create_tab(&self, url: &str) -> Result<()>;

    /// An empty path removes the popup so that `action.onClicked` fires
    async fn set_popup(&self, popup: &str) -> Result<()>;

    async fn open_options_page(&self) -> Result<()>;

    async fn create_menu_item(&self, item: MenuItem) -> Result<()>;

    async fn sleep(&self, delay: Duration);
}
