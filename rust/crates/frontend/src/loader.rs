//! App list fetch.

use gloo_net::http::Request;
use grid_core::{AppListError, absorb_failure, check_status, parse_app_list};
use serde_json::Value;
use web_sys::RequestCache;

/// Fetch the app list, bypassing the HTTP cache.
///
/// Any failure is logged and yields an empty array.
pub async fn load_app_list(path: &str) -> Value {
    absorb_failure(fetch_app_list(path).await)
}

async fn fetch_app_list(path: &str) -> grid_core::Result<Value> {
    let response = Request::get(path)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(network)?;

    check_status(response.status())?;

    let body = response.text().await.map_err(network)?;
    parse_app_list(&body)
}

fn network(err: gloo_net::Error) -> AppListError {
    AppListError::Network(err.to_string())
}
