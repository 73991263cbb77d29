//! Access to the external case-management service.
//!
//! Handlers only see the [`Upstream`] trait. The production implementation is
//! [`HttpUpstream`]; tests swap in a scripted double so no handler needs a
//! live service.

mod http;
#[cfg(test)]
pub mod scripted;

pub use http::HttpUpstream;

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::error::ProxyError;

/// Body returned by the external service.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    Json(Value),
    /// Non-JSON text, kept only for non-success answers so the caller can see
    /// why the service refused.
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: UpstreamBody,
}

impl UpstreamReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: UpstreamBody::Json(body),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Upstream: Send + Sync {
    /// `GET {base}{path}`.
    fn get_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<UpstreamReply, ProxyError>>;

    /// `POST {base}{path}` with `body` as `application/json`.
    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<UpstreamReply, ProxyError>>;
}
