use actix_web::{web, HttpResponse};

use crate::error::ProxyError;
use crate::services::relay::forward_get;
use crate::upstream::Upstream;

const UPSTREAM_MISSING_PERSONS: &str = "/api/missing_persons";
const UPSTREAM_UNIDENTIFIED_BODIES: &str = "/api/unidentified_bodies";

pub async fn missing_persons(upstream: web::Data<dyn Upstream>) -> Result<HttpResponse, ProxyError> {
    forward_get(upstream.get_ref(), UPSTREAM_MISSING_PERSONS).await
}

pub async fn unidentified_bodies(
    upstream: web::Data<dyn Upstream>,
) -> Result<HttpResponse, ProxyError> {
    forward_get(upstream.get_ref(), UPSTREAM_UNIDENTIFIED_BODIES).await
}
