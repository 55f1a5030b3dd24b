/// New-tab detection for freshly created tabs

/// Exact URLs browsers use for an untouched new tab
const NEW_TAB_URLS: [&str; 4] = [
    "chrome://newtab/",
    "about:blank",
    "edge://newtab/",
    "about:newtab",
];

/// Host new-tab-page URLs, matched anywhere in the URL
const NEW_TAB_PAGE_MARKERS: [&str; 2] = ["chrome://new-tab-page", "edge://new-tab-page"];

/// Extension-hosted new tab pages
const EXTENSION_PAGE_PREFIX: &str = "chrome-extension://";

/// Check whether a URL is one of the known new-tab sentinels
///
/// Examples:
/// - about:blank → true
/// - chrome://new-tab-page/ → true
/// - chrome-extension://abc/newtab.html → true
/// - https://example.com → false
pub fn is_new_tab_url(url: &str) -> bool {
    NEW_TAB_URLS.contains(&url)
        || NEW_TAB_PAGE_MARKERS.iter().any(|marker| url.contains(marker))
        || url.starts_with(EXTENSION_PAGE_PREFIX)
}

/// An absent or empty URL says nothing about the tab's destination
fn is_blank_url(url: Option<&str>) -> bool {
    match url {
        None | Some("") => true,
        Some(url) => is_new_tab_url(url),
    }
}

/// Decide whether a created tab is a blank new tab
///
/// Algorithm:
/// 1. A pending URL that is not a sentinel means the tab is already
///    navigating somewhere real → not blank (even if `url` is empty)
/// 2. A current URL that is not a sentinel → not blank
/// 3. Otherwise → blank
pub fn is_blank_new_tab(url: Option<&str>, pending_url: Option<&str>) -> bool {
    is_blank_url(pending_url) && is_blank_url(url)
}
