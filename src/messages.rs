/// Message protocol between the popup and the background worker
use crate::dispatch::sync_popup;
use crate::host::{BrowserHost, SettingsStore};
use crate::redirect::load_settings;
use crate::settings::Settings;
use crate::storage::StoredSettings;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Request sent with `chrome.runtime.sendMessage`, tagged by `action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    GetSettings,
    SaveSettings(Settings),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResult {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Settings(Settings),
    Saved(SaveResult),
}

/// Answer a popup request. Saving refreshes the popup mirror right away
/// instead of waiting for the storage change notification.
pub async fn handle_message<S, H>(store: &S, host: &H, request: Request) -> Response
where
    S: SettingsStore,
    H: BrowserHost,
{
    match request {
        Request::GetSettings => Response::Settings(load_settings(store).await),
        Request::SaveSettings(settings) => {
            let success = match store.set(&StoredSettings::from(&settings)).await {
                Ok(()) => {
                    info!("Saved settings: {:?}", settings);
                    sync_popup(host, settings.open_on_icon_click).await;
                    true
                }
                Err(e) => {
                    warn!("Failed to save settings: {}", e);
                    false
                }
            };
            Response::Saved(SaveResult { success })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::handle_icon_click;
    use crate::host::fake::{HostCall, MemoryStore, RecordingHost};
    use futures::executor::block_on;

    #[test]
    fn test_parse_get_settings() {
        let request: Request = serde_json::from_str(r#"{"action": "getSettings"}"#).unwrap();

        assert_eq!(request, Request::GetSettings);
    }

    #[test]
    fn test_parse_save_settings() {
        let request: Request = serde_json::from_str(
            r#"{"action": "saveSettings", "customUrl": "https://example.com", "isEnabled": false, "openOnIconClick": true}"#,
        )
        .unwrap();

        assert_eq!(
            request,
            Request::SaveSettings(Settings::new("https://example.com".to_string(), false, true))
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result = serde_json::from_str::<Request>(r#"{"action": "reset"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_response_shapes() {
        let saved = serde_json::to_string(&Response::Saved(SaveResult { success: true })).unwrap();
        let settings = serde_json::to_value(Response::Settings(Settings::default())).unwrap();

        assert_eq!(saved, r#"{"success":true}"#);
        assert_eq!(settings["customUrl"], "https://www.google.com");
    }

    #[test]
    fn test_get_settings_defaults() {
        let store = MemoryStore::default();
        let host = RecordingHost::default();

        let response = block_on(handle_message(&store, &host, Request::GetSettings));

        assert_eq!(response, Response::Settings(Settings::default()));
    }

    #[test]
    fn test_save_then_get_round_trip() {
        let store = MemoryStore::default();
        let host = RecordingHost::default();
        let settings = Settings::new("https://example.com/home".to_string(), false, true);

        let saved = block_on(handle_message(&store, &host, Request::SaveSettings(settings.clone())));
        let loaded = block_on(handle_message(&store, &host, Request::GetSettings));

        assert_eq!(saved, Response::Saved(SaveResult { success: true }));
        assert_eq!(loaded, Response::Settings(settings));
    }

    #[test]
    fn test_save_failure_reports_failure() {
        let store = MemoryStore::default();
        store.fail_writes.set(true);
        let host = RecordingHost::default();

        let response = block_on(handle_message(
            &store,
            &host,
            Request::SaveSettings(Settings::default()),
        ));

        assert_eq!(response, Response::Saved(SaveResult { success: false }));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_enabling_icon_click_opens_url_directly() {
        let store = MemoryStore::default();
        let host = RecordingHost::default();
        let settings = Settings::new("https://example.com".to_string(), true, false);

        block_on(handle_message(&store, &host, Request::SaveSettings(settings.clone())));
        assert_eq!(host.last_popup().as_deref(), Some("popup.html"));

        let toggled = Settings {
            open_on_icon_click: true,
            ..settings
        };
        block_on(handle_message(&store, &host, Request::SaveSettings(toggled)));
        assert_eq!(host.last_popup().as_deref(), Some(""));

        block_on(handle_icon_click(&store, &host));
        assert_eq!(
            host.calls().last(),
            Some(&HostCall::CreateTab("https://example.com".to_string()))
        );
    }
}
