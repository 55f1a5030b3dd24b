/// Validation of the custom URL entered in the popup
use crate::error::UrlError;
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Validate popup input and return the URL to store.
///
/// The input is trimmed and must parse as an absolute `http`/`https` URL.
/// The trimmed text is stored as typed, not in normalized form.
pub fn validate_custom_url(input: &str) -> Result<String, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = Url::parse(trimmed)?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(UrlError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    Ok(trimmed.to_string())
}
