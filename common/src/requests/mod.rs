use serde::{Deserialize, Serialize};

/// Request payload for the login endpoint.
/// Carries the one-time code issued to a station and the staff phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub generated_code: String,
    pub phone_number: String,
}
