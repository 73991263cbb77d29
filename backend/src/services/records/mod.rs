//! # Record Listing Routes
//!
//! Read-only listings shown by the dashboards. Both routes forward a bodiless
//! GET to the external service and relay the JSON array it returns:
//!
//! *   **`GET /api/missingpersons`** → `GET {BASE_URL}/api/missing_persons`
//! *   **`GET /api/unidentifiedbodies`** → `GET {BASE_URL}/api/unidentified_bodies`
//!
//! Replies are `200 OK` with the upstream JSON on success, the upstream status
//! and body when the service refuses, and `500` with the error message as
//! plain text when the service cannot be reached or answers with non-JSON.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::routes;

pub fn missing_persons_routes() -> Scope {
    scope(routes::API_MISSING_PERSONS).route("", get().to(get::missing_persons))
}

pub fn unidentified_bodies_routes() -> Scope {
    scope(routes::API_UNIDENTIFIED_BODIES).route("", get().to(get::unidentified_bodies))
}
