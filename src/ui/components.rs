/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

/// A transient message shown at the top of the popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Status {
        Status {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Status {
        Status {
            message: message.into(),
            is_error: true,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    #[prop_or_default]
    pub status: Option<Status>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    match &props.status {
        Some(status) => {
            let alert_type = if status.is_error {
                AlertType::Danger
            } else {
                AlertType::Success
            };

            html! {
                <div class="status">
                    <Alert r#type={alert_type} title={status.message.clone()} inline={true}>
                    </Alert>
                </div>
            }
        }
        None => html! {},
    }
}
