//! App list loading outcome.
//!
//! The fetch itself lives in the frontend. This module owns the failure
//! taxonomy and the fail-open policy applied to it.

use serde_json::Value;
use thiserror::Error;

/// Relative path of the static app list.
pub const APP_LIST_PATH: &str = "data/app_list.json";

/// Reasons the app list could not be loaded.
#[derive(Error, Debug)]
pub enum AppListError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("JSON parsing failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for app list loading.
pub type Result<T> = std::result::Result<T, AppListError>;

/// Reject anything outside the 2xx range.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppListError::Status(status))
    }
}

/// Parse the response body. The shape is not validated here.
pub fn parse_app_list(body: &str) -> Result<Value> {
    Ok(serde_json::from_str(body)?)
}

/// Log a failed load and fall back to an empty list.
pub fn absorb_failure(result: Result<Value>) -> Value {
    match result {
        Ok(payload) => payload,
        Err(err) => {
            log::error!("Error loading app list: {err}");
            Value::Array(Vec::new())
        }
    }
}
