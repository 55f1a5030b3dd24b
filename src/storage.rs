/// Storage serialization utilities for chrome.storage.sync

use crate::settings::{
    DEFAULT_CUSTOM_URL, DEFAULT_IS_ENABLED, DEFAULT_OPEN_ON_ICON_CLICK, Settings,
};
use serde::{Deserialize, Serialize};

/// Storage area the settings live in
pub const STORAGE_AREA: &str = "sync";

/// Keys read from storage for a full settings load
pub const SETTINGS_KEYS: [&str; 3] = ["customUrl", "isEnabled", "openOnIconClick"];

/// Settings as found in storage: any key may be missing.
///
/// Also used as a write patch, where only the present keys are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_on_icon_click: Option<bool>,
}

impl StoredSettings {
    pub fn is_empty(&self) -> bool {
        self.custom_url.is_none() && self.is_enabled.is_none() && self.open_on_icon_click.is_none()
    }

    /// Resolve to a full settings record, filling gaps with the defaults.
    /// An empty custom URL counts as missing.
    pub fn resolve(&self) -> Settings {
        Settings::new(
            self.custom_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_CUSTOM_URL.to_string()),
            self.is_enabled.unwrap_or(DEFAULT_IS_ENABLED),
            self.open_on_icon_click.unwrap_or(DEFAULT_OPEN_ON_ICON_CLICK),
        )
    }

    /// Patch holding the defaults for every key that is missing here
    pub fn missing_defaults(&self) -> StoredSettings {
        StoredSettings {
            custom_url: match self.custom_url.as_deref() {
                None | Some("") => Some(DEFAULT_CUSTOM_URL.to_string()),
                Some(_) => None,
            },
            is_enabled: match self.is_enabled {
                None => Some(DEFAULT_IS_ENABLED),
                Some(_) => None,
            },
            open_on_icon_click: match self.open_on_icon_click {
                None => Some(DEFAULT_OPEN_ON_ICON_CLICK),
                Some(_) => None,
            },
        }
    }
}

impl From<&Settings> for StoredSettings {
    fn from(settings: &Settings) -> Self {
        StoredSettings {
            custom_url: Some(settings.custom_url.clone()),
            is_enabled: Some(settings.is_enabled),
            open_on_icon_click: Some(settings.open_on_icon_click),
        }
    }
}

/// One entry of a `storage.onChanged` change set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueChange<T> {
    #[serde(default)]
    pub old_value: Option<T>,
    #[serde(default)]
    pub new_value: Option<T>,
}

/// Change set delivered by `storage.onChanged`, restricted to our keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsChanges {
    #[serde(default)]
    pub custom_url: Option<ValueChange<String>>,
    #[serde(default)]
    pub is_enabled: Option<ValueChange<bool>>,
    #[serde(default)]
    pub open_on_icon_click: Option<ValueChange<bool>>,
}
