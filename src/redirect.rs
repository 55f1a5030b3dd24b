/// Redirect policy for newly created tabs
use crate::classifier::is_blank_new_tab;
use crate::host::{BrowserHost, SettingsStore};
use crate::settings::{Settings, TabEvent};
use log::{debug, warn};
use std::time::Duration;

/// Wait before redirecting so the browser's own new tab page render doesn't
/// overwrite ours. Heuristic, tune as needed.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    Redirect { tab_id: i32, url: String },
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The tab is navigating somewhere real
    NotBlank,
    Disabled,
    /// The host gave us a tab without an id
    NoTabId,
}

/// Decide what to do with a blank tab given the current settings
pub fn decide(tab: &TabEvent, settings: &Settings) -> RedirectDecision {
    if !is_blank_new_tab(tab.url.as_deref(), tab.pending_url.as_deref()) {
        return RedirectDecision::Skip(SkipReason::NotBlank);
    }
    if !settings.is_enabled || settings.custom_url.is_empty() {
        return RedirectDecision::Skip(SkipReason::Disabled);
    }
    match tab.id {
        Some(tab_id) => RedirectDecision::Redirect {
            tab_id,
            url: settings.custom_url.clone(),
        },
        None => RedirectDecision::Skip(SkipReason::NoTabId),
    }
}

/// Where the new tab override page should send the user, if anywhere
pub fn newtab_target(settings: &Settings) -> Option<&str> {
    if settings.is_enabled && !settings.custom_url.is_empty() {
        Some(settings.custom_url.as_str())
    } else {
        None
    }
}

/// Read settings, falling back to the defaults when storage is unreadable
pub async fn load_settings<S: SettingsStore>(store: &S) -> Settings {
    match store.get().await {
        Ok(stored) => stored.resolve(),
        Err(e) => {
            warn!("Failed to read settings, using defaults: {}", e);
            Settings::default()
        }
    }
}

/// Handle `tabs.onCreated`: redirect a blank new tab to the custom URL.
///
/// Issues at most one tab update. A failed update (e.g. the tab was closed
/// during the delay) is logged and dropped.
pub async fn handle_tab_created<S, H>(store: &S, host: &H, tab: &TabEvent) -> RedirectDecision
where
    S: SettingsStore,
    H: BrowserHost,
{
    // Skip the storage read for tabs that are clearly navigating
    if !is_blank_new_tab(tab.url.as_deref(), tab.pending_url.as_deref()) {
        debug!("Tab {:?} is not a new tab, leaving it alone", tab.id);
        return RedirectDecision::Skip(SkipReason::NotBlank);
    }

    let settings = load_settings(store).await;
    let decision = decide(tab, &settings);

    if let RedirectDecision::Redirect { tab_id, url } = &decision {
        host.sleep(REDIRECT_DELAY).await;
        debug!("Redirecting tab {} to {}", tab_id, url);
        if let Err(e) = host.update_tab(*tab_id, url).await {
            warn!("Redirect of tab {} dropped: {}", tab_id, e);
        }
    } else {
        debug!("Not redirecting tab {:?}: {:?}", tab.id, decision);
    }

    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::{HostCall, MemoryStore, RecordingHost};
    use crate::storage::StoredSettings;
    use futures::executor::block_on;

    fn stored(url: &str, enabled: bool) -> StoredSettings {
        StoredSettings {
            custom_url: Some(url.to_string()),
            is_enabled: Some(enabled),
            open_on_icon_click: Some(false),
        }
    }

    #[test]
    fn test_decide_redirects_blank_tab() {
        let settings = Settings::new("https://example.com".to_string(), true, false);
        let tab = TabEvent::new(3, Some("chrome://newtab/"), None);

        assert_eq!(
            decide(&tab, &settings),
            RedirectDecision::Redirect {
                tab_id: 3,
                url: "https://example.com".to_string()
            }
        );
    }

    #[test]
    fn test_decide_disabled_never_redirects() {
        let settings = Settings::new("https://example.com".to_string(), false, false);
        let blank = TabEvent::new(1, Some("about:blank"), None);
        let real = TabEvent::new(2, None, Some("https://rust-lang.org"));

        assert_eq!(decide(&blank, &settings), RedirectDecision::Skip(SkipReason::Disabled));
        assert_eq!(decide(&real, &settings), RedirectDecision::Skip(SkipReason::NotBlank));
    }

    #[test]
    fn test_decide_without_tab_id() {
        let settings = Settings::default();
        let tab = TabEvent {
            url: Some("about:blank".to_string()),
            ..TabEvent::default()
        };

        assert_eq!(decide(&tab, &settings), RedirectDecision::Skip(SkipReason::NoTabId));
    }

    #[test]
    fn test_newtab_target() {
        let enabled = Settings::new("https://example.com".to_string(), true, false);
        let disabled = Settings::new("https://example.com".to_string(), false, false);

        assert_eq!(newtab_target(&enabled), Some("https://example.com"));
        assert_eq!(newtab_target(&disabled), None);
    }

    #[test]
    fn test_blank_tab_redirected_once_after_delay() {
        let store = MemoryStore::with(stored("https://example.com", true));
        let host = RecordingHost::default();
        let tab = TabEvent::new(42, Some(""), Some("chrome://newtab/"));

        block_on(handle_tab_created(&store, &host, &tab));

        assert_eq!(
            host.calls(),
            vec![
                HostCall::Sleep(REDIRECT_DELAY),
                HostCall::UpdateTab(42, "https://example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_disabled_issues_no_redirect() {
        let store = MemoryStore::with(stored("https://example.com", false));
        let host = RecordingHost::default();
        let tab = TabEvent::new(42, Some("about:blank"), None);

        let decision = block_on(handle_tab_created(&store, &host, &tab));

        assert_eq!(decision, RedirectDecision::Skip(SkipReason::Disabled));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_navigating_tab_is_left_alone() {
        let store = MemoryStore::with(stored("https://example.com", true));
        let host = RecordingHost::default();
        let tab = TabEvent::new(5, None, Some("https://docs.rs/"));

        let decision = block_on(handle_tab_created(&store, &host, &tab));

        assert_eq!(decision, RedirectDecision::Skip(SkipReason::NotBlank));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_missing_settings_use_default_url() {
        let store = MemoryStore::default();
        let host = RecordingHost::default();
        let tab = TabEvent::new(9, Some("about:newtab"), None);

        block_on(handle_tab_created(&store, &host, &tab));

        assert_eq!(
            host.calls().last(),
            Some(&HostCall::UpdateTab(9, "https://www.google.com".to_string()))
        );
    }

    #[test]
    fn test_unreadable_store_uses_defaults() {
        let store = MemoryStore::with(stored("https://example.com", false));
        store.fail_reads.set(true);
        let host = RecordingHost::default();
        let tab = TabEvent::new(9, None, None);

        let decision = block_on(handle_tab_created(&store, &host, &tab));

        assert_eq!(
            decision,
            RedirectDecision::Redirect {
                tab_id: 9,
                url: "https://www.google.com".to_string()
            }
        );
    }

    #[test]
    fn test_failed_update_is_not_retried() {
        let store = MemoryStore::with(stored("https://example.com", true));
        let host = RecordingHost::default();
        host.fail_tab_updates.set(true);
        let tab = TabEvent::new(11, Some("about:blank"), None);

        block_on(handle_tab_created(&store, &host, &tab));

        let updates = host
            .calls()
            .into_iter()
            .filter(|call| matches!(call, HostCall::UpdateTab(..)))
            .count();
        assert_eq!(updates, 1);
    }
}
