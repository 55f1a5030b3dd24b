/// Data structures for Custom New Tab
use serde::{Deserialize, Serialize};

pub const DEFAULT_CUSTOM_URL: &str = "https://www.google.com";
pub const DEFAULT_IS_ENABLED: bool = true;
pub const DEFAULT_OPEN_ON_ICON_CLICK: bool = false;

/// User settings, persisted in `chrome.storage.sync`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub custom_url: String,
    pub is_enabled: bool,
    pub open_on_icon_click: bool,
}

impl Settings {
    pub fn new(custom_url: String, is_enabled: bool, open_on_icon_click: bool) -> Settings {
        Settings {
            custom_url,
            is_enabled,
            open_on_icon_click,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            custom_url: DEFAULT_CUSTOM_URL.to_string(),
            is_enabled: DEFAULT_IS_ENABLED,
            open_on_icon_click: DEFAULT_OPEN_ON_ICON_CLICK,
        }
    }
}

/// The part of a `chrome.tabs.Tab` the redirect policy looks at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEvent {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pending_url: Option<String>,
}

#[cfg(test)]
impl TabEvent {
    pub fn new(id: i32, url: Option<&str>, pending_url: Option<&str>) -> TabEvent {
        TabEvent {
            id: Some(id),
            url: url.map(str::to_string),
            pending_url: pending_url.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.custom_url, "https://www.google.com");
        assert!(settings.is_enabled);
        assert!(!settings.open_on_icon_click);
    }

    #[test]
    fn test_settings_use_camel_case_keys() {
        let settings = Settings::new("https://example.com".to_string(), false, true);

        let json = serde_json::to_value(&settings).unwrap();

        assert_eq!(json["customUrl"], "https://example.com");
        assert_eq!(json["isEnabled"], false);
        assert_eq!(json["openOnIconClick"], true);
    }

    #[test]
    fn test_tab_event_from_chrome_tab() {
        let tab: TabEvent = serde_json::from_str(
            r#"{"id": 7, "pendingUrl": "https://rust-lang.org/", "index": 2, "active": true}"#,
        )
        .unwrap();

        assert_eq!(tab.id, Some(7));
        assert_eq!(tab.url, None);
        assert_eq!(tab.pending_url.as_deref(), Some("https://rust-lang.org/"));
    }

    #[test]
    fn test_tab_event_without_id() {
        let tab: TabEvent = serde_json::from_str(r#"{"url": "about:blank"}"#).unwrap();

        assert_eq!(tab.id, None);
        assert_eq!(tab.url.as_deref(), Some("about:blank"));
    }
}
