/// Settings popup for Custom New Tab

use crate::chrome::send_message;
use crate::error::{ExtensionError, Result};
use crate::messages::{Request, SaveResult};
use crate::settings::Settings;
use crate::ui::components::{Status, StatusBanner};
use crate::validation::validate_custom_url;
use patternfly_yew::prelude::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::platform::time::sleep;
use yew::prelude::*;

/// How long a status message stays visible
pub const STATUS_DISMISS_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    Ready,
    Error(String),
}

fn toggle_label(is_enabled: bool) -> &'static str {
    if is_enabled {
        "Disable Custom URL"
    } else {
        "Enable Custom URL"
    }
}

fn enabled_message(is_enabled: bool) -> &'static str {
    if is_enabled {
        "Custom URL enabled!"
    } else {
        "Custom URL disabled!"
    }
}

fn icon_click_message(open_on_icon_click: bool) -> &'static str {
    if open_on_icon_click {
        "Extension icon will now open URL!"
    } else {
        "Extension icon will show settings"
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Loading);
    let settings = use_state(Settings::default);
    let url_input = use_state(String::new);
    let status = use_state(|| None::<Status>);
    // Bumped on every new status so stale dismiss timers do nothing
    let status_generation = use_mut_ref(|| 0u32);

    // Load settings on mount
    {
        let state = state.clone();
        let settings = settings.clone();
        let url_input = url_input.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_settings().await {
                    Ok(loaded) => {
                        url_input.set(loaded.custom_url.clone());
                        settings.set(loaded);
                        state.set(PopupState::Ready);
                    }
                    Err(e) => {
                        state.set(PopupState::Error(format!("Failed to load settings: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    let show_status = {
        let status = status.clone();
        let status_generation = status_generation.clone();

        Callback::from(move |next: Status| {
            let ticket = {
                let mut generation = status_generation.borrow_mut();
                *generation = generation.wrapping_add(1);
                *generation
            };
            status.set(Some(next));

            let status = status.clone();
            let status_generation = status_generation.clone();
            spawn_local(async move {
                sleep(STATUS_DISMISS_DELAY).await;
                if *status_generation.borrow() == ticket {
                    status.set(None);
                }
            });
        })
    };

    let on_url_input = {
        let url_input = url_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                url_input.set(input.value());
            }
        })
    };

    // Save URL handler
    let on_save = {
        let settings = settings.clone();
        let url_input = url_input.clone();
        let show_status = show_status.clone();

        Callback::from(move |_: ()| {
            let url = match validate_custom_url(&url_input) {
                Ok(url) => url,
                Err(e) => {
                    show_status.emit(Status::error(e.to_string()));
                    return;
                }
            };

            let next = Settings {
                custom_url: url,
                ..(*settings).clone()
            };
            settings.set(next.clone());

            let show_status = show_status.clone();
            spawn_local(async move {
                match save_settings(&next).await {
                    Ok(true) => show_status.emit(Status::success("URL saved successfully!")),
                    _ => show_status.emit(Status::error("Failed to save URL")),
                }
            });
        })
    };

    let on_url_keypress = {
        let on_save = on_save.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_save.emit(());
            }
        })
    };

    // Enable/disable handler
    let on_toggle = {
        let settings = settings.clone();
        let show_status = show_status.clone();

        Callback::from(move |_| {
            let next = Settings {
                is_enabled: !settings.is_enabled,
                ..(*settings).clone()
            };

            let settings = settings.clone();
            let show_status = show_status.clone();
            spawn_local(async move {
                match save_settings(&next).await {
                    Ok(true) => {
                        show_status.emit(Status::success(enabled_message(next.is_enabled)));
                        settings.set(next);
                    }
                    _ => show_status.emit(Status::error("Failed to update setting")),
                }
            });
        })
    };

    // Open-on-icon-click handler
    let on_icon_click_change = {
        let settings = settings.clone();
        let show_status = show_status.clone();

        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let next = Settings {
                open_on_icon_click: input.checked(),
                ..(*settings).clone()
            };
            settings.set(next.clone());

            let show_status = show_status.clone();
            spawn_local(async move {
                match save_settings(&next).await {
                    Ok(true) => show_status.emit(Status::success(icon_click_message(
                        next.open_on_icon_click,
                    ))),
                    _ => show_status.emit(Status::error("Failed to update setting")),
                }
            });
        })
    };

    let is_loading = matches!(*state, PopupState::Loading);
    let toggle_variant = if settings.is_enabled {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Custom New Tab"}</h1>

            if let PopupState::Error(err) = &*state {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err.clone()}
                </Alert>
            }

            <StatusBanner status={(*status).clone()} />

            <div class="flex-column-gap">
                <label class="field-label">{"New tab URL"}</label>
                <input
                    id="url-input"
                    type="url"
                    placeholder="https://example.com"
                    value={(*url_input).clone()}
                    oninput={on_url_input}
                    onkeypress={on_url_keypress}
                    disabled={is_loading}
                    class="url-input"
                />
                <Button onclick={on_save.reform(|_| ())} disabled={is_loading} block={true}>
                    {"Save URL"}
                </Button>
                <Button onclick={on_toggle} disabled={is_loading} variant={toggle_variant} block={true}>
                    {toggle_label(settings.is_enabled)}
                </Button>
                <label class="checkbox-label">
                    <input
                        id="open-on-click"
                        type="checkbox"
                        checked={settings.open_on_icon_click}
                        onchange={on_icon_click_change}
                        disabled={is_loading}
                    />
                    {" Open URL when clicking the extension icon"}
                </label>
            </div>

            <p class="footer-popup">
                {"Custom New Tab v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

async fn fetch_settings() -> Result<Settings> {
    let response = send_message(&Request::GetSettings).await?;
    Ok(serde_wasm_bindgen::from_value(response)?)
}

async fn save_settings(settings: &Settings) -> Result<bool> {
    let response = send_message(&Request::SaveSettings(settings.clone())).await?;
    if response.is_null() || response.is_undefined() {
        return Err(ExtensionError::Runtime("no response to saveSettings".to_string()));
    }
    let result: SaveResult = serde_wasm_bindgen::from_value(response)?;
    Ok(result.success)
}
