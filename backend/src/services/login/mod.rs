//! # Login
//!
//! *   **`POST /api/login`**:
//!     - **Handler**: `post::process`
//!     - **Description**: Forwards a `LoginRequest` (`generated_code`, `phone_number`)
//!       to `POST {BASE_URL}/api/login/`. On success the reply is a `Session` whose
//!       `role` tells the client which verification page comes next, so the client
//!       never inspects the code format itself.

mod post;

use actix_web::web::{post, scope};
use actix_web::Scope;
use common::routes;

pub fn configure_routes() -> Scope {
    scope(routes::API_LOGIN).route("", post().to(post::process))
}
