use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;

use crate::error::ProxyError;
use crate::upstream::{Upstream, UpstreamBody, UpstreamReply};

/// Carries the status the external service actually answered with, so callers
/// can tell a relayed success apart from the status this proxy chose.
pub(crate) const UPSTREAM_STATUS_HEADER: &str = "x-upstream-status";

/// Successful replies get `success`; anything else is passed through with the
/// upstream status and body untouched.
pub(crate) fn relay(reply: UpstreamReply, success: StatusCode) -> HttpResponse {
    let status = if reply.is_success() {
        success
    } else {
        StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY)
    };

    let mut builder = HttpResponse::build(status);
    builder.insert_header((UPSTREAM_STATUS_HEADER, reply.status.to_string()));
    match reply.body {
        UpstreamBody::Json(json) => builder.json(json),
        UpstreamBody::Text(text) => builder
            .content_type("text/plain; charset=utf-8")
            .body(text),
    }
}

/// Forwards a bodiless GET and relays the reply with `200 OK` on success.
pub(crate) async fn forward_get(
    upstream: &dyn Upstream,
    path: &str,
) -> Result<HttpResponse, ProxyError> {
    let reply = upstream
        .get_json(path)
        .await
        .inspect_err(|e| error!("GET {} failed: {}", path, e))?;
    Ok(relay(reply, StatusCode::OK))
}
