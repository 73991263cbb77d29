//! # Proxy Services
//!
//! Every route in this module forwards to the external case-management
//! service configured through `BASE_URL` and relays what it answers.
//!
//! ## Sub-modules:
//! - `records`: read-only record listings (missing persons, unidentified bodies).
//! - `next_of_kin`: submission of next-of-kin details.
//! - `login`: one-time-code login, answered with a typed `Session`.
//! - `relay`: shared translation of upstream replies into responses.

mod login;
mod next_of_kin;
mod records;
mod relay;

use actix_web::web;

use crate::error::ProxyError;
use crate::upstream::Upstream;

/// Registers the shared upstream client, the JSON body limits and all proxy
/// routes.
///
/// Malformed inbound JSON is reported like any other proxy failure: `500`
/// with the parser message as plain text.
pub fn configure(cfg: &mut web::ServiceConfig, upstream: web::Data<dyn Upstream>, json_limit: usize) {
    let json_config = web::JsonConfig::default()
        .limit(json_limit)
        .error_handler(|err, _req| ProxyError::InvalidBody(err.to_string()).into());

    cfg.app_data(upstream)
        .app_data(json_config)
        .service(records::missing_persons_routes())
        .service(records::unidentified_bodies_routes())
        .service(next_of_kin::configure_routes())
        .service(login::configure_routes());
}
