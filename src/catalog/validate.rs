use thiserror::Error;

use super::model::Client;

/// A single human-readable reason a candidate record was rejected. Checks
/// short-circuit: only the first failing rule is reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("download URL is required")]
    DownloadRequired,
    #[error("download URL must start with http or https")]
    DownloadScheme,
    #[error("website URL must start with http or https")]
    WebsiteScheme,
}

fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http")
}

pub fn validate(client: &Client) -> Result<(), ValidationError> {
    if client.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if client.download.is_empty() {
        return Err(ValidationError::DownloadRequired);
    }
    if !has_http_scheme(&client.download) {
        return Err(ValidationError::DownloadScheme);
    }
    if let Some(website) = &client.website {
        if !has_http_scheme(website) {
            return Err(ValidationError::WebsiteScheme);
        }
    }
    Ok(())
}
