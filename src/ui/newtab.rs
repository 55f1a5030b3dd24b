/// New tab override page

use crate::chrome::{ChromeHost, ChromeStore};
use crate::host::BrowserHost;
use crate::redirect::{load_settings, newtab_target};
use log::warn;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Redirecting(String),
    Disabled,
}

fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window to navigate from");
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        warn!("Failed to navigate to {}: {:?}", url, e);
    }
}

#[function_component(NewTabPage)]
pub fn new_tab_page() -> Html {
    let state = use_state(|| PageState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let settings = load_settings(&ChromeStore).await;
                match newtab_target(&settings) {
                    Some(url) => {
                        state.set(PageState::Redirecting(url.to_string()));
                        navigate(url);
                    }
                    None => state.set(PageState::Disabled),
                }
            });
            || ()
        });
    }

    let on_open_settings = Callback::from(move |_| {
        spawn_local(async move {
            if let Err(e) = ChromeHost.open_options_page().await {
                warn!("Failed to open settings: {}", e);
            }
        });
    });

    match &*state {
        PageState::Loading => html! {
            <div class="newtab-page">
                <Spinner />
            </div>
        },
        PageState::Redirecting(url) => html! {
            <div class="newtab-page">
                <p class="newtab-hint">{format!("Opening {}...", url)}</p>
            </div>
        },
        PageState::Disabled => html! {
            <div class="newtab-page">
                <h1 class="newtab-title">{"Custom New Tab"}</h1>
                <p class="newtab-hint">{"Custom URL is currently disabled"}</p>
                <Button onclick={on_open_settings}>
                    {"Open Settings"}
                </Button>
            </div>
        },
    }
}
