//! Calls to the backend proxy routes.
//!
//! - `fetch_json` performs the single GET behind a dashboard, optionally tied
//!   to an `AbortSignal` so an unmounted view can cancel it.
//! - `AbortGuard` owns the `AbortController` and aborts on drop.
//! - `post_login` submits the login form and returns a typed `Session`.

use common::requests::LoginRequest;
use common::routes;
use common::session::{LoginError, Session};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{AbortController, AbortSignal};

/// Why a records fetch produced no data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Status { status: u16, message: String },
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(message) | FetchError::Decode(message) => f.write_str(message),
            FetchError::Status { status, message } => write!(f, "{} ({})", message, status),
        }
    }
}

/// `{data, isLoading, error}` of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

impl<T> From<Result<Vec<T>, FetchError>> for FetchState<T> {
    fn from(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(records) => FetchState::Ready(records),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

/// Aborts the in-flight request when dropped.
pub struct AbortGuard {
    controller: Option<AbortController>,
}

impl AbortGuard {
    pub fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

pub async fn fetch_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            message: failure_message(&response).await,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn post_login(request: &LoginRequest) -> Result<Session, LoginError> {
    let response = Request::post(routes::API_LOGIN)
        .json(request)
        .map_err(|e| LoginError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoginError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoginError::Rejected {
            status: response.status(),
            message: failure_message(&response).await,
        });
    }

    response
        .json::<Session>()
        .await
        .map_err(|e| LoginError::Decode(e.to_string()))
}

/// Body text of a refused request, or the status text when the body is empty.
async fn failure_message(response: &Response) -> String {
    match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => response.status_text(),
    }
}
