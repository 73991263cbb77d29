//! Failures at the proxy boundary.
//!
//! Every variant renders the same way: `500 Internal Server Error` with the
//! bare error message as a plain-text body. Callers get no structured code and
//! no distinction between client-caused and upstream-caused failures.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProxyError {
    /// The external service could not be reached.
    #[error("{0}")]
    Transport(String),
    /// The external service answered with something that is not JSON.
    #[error("{0}")]
    Decode(String),
    /// The inbound request body could not be read as JSON.
    #[error("{0}")]
    InvalidBody(String),
}

impl ProxyError {
    pub fn transport(err: &reqwest::Error) -> Self {
        ProxyError::Transport(error_chain(err))
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

/// `reqwest` keeps the interesting part (e.g. "Connection refused") in the
/// source chain, so the whole chain goes into the message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
