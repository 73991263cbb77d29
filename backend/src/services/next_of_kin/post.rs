use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::{error, info};
use serde_json::Value;

use crate::error::ProxyError;
use crate::services::relay::relay;
use crate::upstream::Upstream;

const UPSTREAM_PATH: &str = "/api/nextofkin/";

pub async fn process(
    payload: web::Json<Value>,
    upstream: web::Data<dyn Upstream>,
) -> Result<HttpResponse, ProxyError> {
    let payload = payload.into_inner();
    info!("Received next-of-kin data: {}", payload);

    let reply = upstream
        .post_json(UPSTREAM_PATH, &payload)
        .await
        .inspect_err(|e| error!("Forwarding next-of-kin data failed: {}", e))?;
    Ok(relay(reply, StatusCode::CREATED))
}
