//! REST API client for the notifications backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response funnels through [`decode_response`], which classifies the
//! status code into a typed [`ApiError`] before any body parsing. The
//! network layer never navigates or touches the session; a
//! [`ApiError::Unauthorized`] result is handed back to the caller, and a
//! single policy at the state layer decides what to do about it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    HealthResponse, LoginResponse, NotificationsResponse, SaveOutcome, UserPreferences,
};

/// Compile-time override for the API origin; defaults to the local dev server.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Base URL of the notifications API.
pub fn base_url() -> &'static str {
    option_env!("NOTIFY_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Typed failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the session. The caller must clear the stored
    /// session; the route guard then navigates to the login page.
    #[error("Unauthorized")]
    Unauthorized,
    /// Non-2xx, non-401 response. `message` comes from the server's
    /// `{error}` envelope when present, else `HTTP <status>`.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Server-side error envelope, `{"error": "..."}`.
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

/// Classify a raw response into a typed result.
///
/// 401 is checked before anything else so every endpoint gets the same
/// expired-session behavior. For other failures the `{error}` envelope is
/// preferred; a malformed error body falls back to `HTTP <status>` and is
/// never allowed to mask the original failure.
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(ApiError::Server { status, message });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Transport(e.to_string()))
}

/// Classify a `POST /preferences` response, where `204` is a success with
/// no body and `200` carries the canonical echo.
pub(crate) fn decode_save_response(status: u16, body: &str) -> Result<SaveOutcome, ApiError> {
    if status == 204 {
        return Ok(SaveOutcome::Accepted);
    }
    decode_response::<UserPreferences>(status, body).map(SaveOutcome::Canonical)
}

/// Exchange an email for a session token via `POST /login`.
///
/// The body is form-encoded, matching the server's `PostForm` handler.
/// Storing the token on success is the caller's job.
///
/// # Errors
///
/// Returns [`ApiError`] on any non-2xx response or transport failure.
pub async fn login(email: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::Transport("UrlSearchParams unavailable".to_owned()))?;
        params.append("email", email);
        let resp = gloo_net::http::Request::post(&format!("{}/login", base_url()))
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .body(params.to_string().as_string().unwrap_or_default())
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp.text().await.unwrap_or_default();
        decode_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(server_only())
    }
}

/// Fetch the notification list and current preferences.
///
/// Callers must hold a non-empty token; the cache layer guards this and
/// never dispatches the call without one.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] on 401, [`ApiError`] otherwise.
pub async fn fetch_notifications(token: &str) -> Result<NotificationsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/notifications", base_url()))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp.text().await.unwrap_or_default();
        decode_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(server_only())
    }
}

/// Write a preferences patch via `POST /preferences`.
///
/// # Errors
///
/// Returns [`ApiError`] on any failure; see [`SaveOutcome`] for the two
/// success shapes.
pub async fn update_preferences(
    token: &str,
    patch: UserPreferences,
) -> Result<SaveOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/preferences", base_url()))
            .header("Authorization", &format!("Bearer {token}"))
            .json(&patch)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp.text().await.unwrap_or_default();
        decode_save_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, patch);
        Err(server_only())
    }
}

/// Check `GET /healthz`. Unauthenticated; used only by the health poller.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the API is unreachable.
pub async fn health() -> Result<HealthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/healthz", base_url()))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp.text().await.unwrap_or_default();
        decode_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_only())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_only() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}
