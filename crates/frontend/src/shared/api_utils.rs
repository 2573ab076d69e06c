//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and turning `gloo-net`
//! responses into [`ApiError`]s.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use super::config::DEFAULT_API_PORT;
use super::error::ApiError;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 5000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:5000" or "https://example.com:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Fail with [`ApiError::Status`] unless the response is 2xx.
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

/// Check the status and decode a JSON body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
