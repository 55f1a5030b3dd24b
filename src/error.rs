/// Error types for the extension's host bridge and URL input
use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, ExtensionError>;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("tabs error: {0}")]
    Tabs(String),

    #[error("action error: {0}")]
    Action(String),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ExtensionError {
    pub fn storage(err: JsValue) -> Self {
        Self::Storage(format!("{:?}", err))
    }

    pub fn tabs(err: JsValue) -> Self {
        Self::Tabs(format!("{:?}", err))
    }

    pub fn action(err: JsValue) -> Self {
        Self::Action(format!("{:?}", err))
    }

    pub fn runtime(err: JsValue) -> Self {
        Self::Runtime(format!("{:?}", err))
    }
}

impl From<serde_wasm_bindgen::Error> for ExtensionError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Rejection reasons for a custom URL typed into the popup.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Please enter a URL")]
    Empty,

    #[error("Please enter a valid URL (must start with http:// or https://)")]
    Unparseable(#[from] url::ParseError),

    #[error("Please enter a valid URL (must start with http:// or https://)")]
    UnsupportedScheme(String),
}
