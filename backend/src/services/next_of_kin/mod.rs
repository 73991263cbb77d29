//! # Next-of-Kin Submission
//!
//! *   **`POST /api/nextofkin`**:
//!     - **Handler**: `post::process`
//!     - **Description**: Parses the inbound JSON body and forwards it unchanged to
//!       `POST {BASE_URL}/api/nextofkin/` as `application/json`. A successful upstream
//!       reply is relayed with `201 Created`; a refusal keeps the upstream status and
//!       body. Transport and decode failures answer `500` with the message as plain text.

mod post;

use actix_web::web::{post, scope};
use actix_web::Scope;
use common::routes;

pub fn configure_routes() -> Scope {
    scope(routes::API_NEXT_OF_KIN).route("", post().to(post::process))
}
