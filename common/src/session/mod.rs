//! Login outcome and the session-hint cookies written after a successful login.
//!
//! The cookies only steer navigation to the right verification page; nothing
//! in this workspace treats them as credentials.

mod flow;

pub use flow::{Banner, LoginFlow, LoginPhase};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routes;

pub const GENERATED_CODE_COOKIE: &str = "generated_code";
pub const PHONE_NUMBER_COOKIE: &str = "phone_number";

/// Session hints live for 24 hours.
pub const SESSION_MAX_AGE_SECS: u32 = 60 * 60 * 24;

/// How long "Login successful!" stays up before navigating away.
pub const SUCCESS_REDIRECT_MS: u32 = 2_000;

/// How long "Login failed" stays up.
pub const ERROR_BANNER_MS: u32 = 3_000;

const POLICE_CODE_PREFIX: &str = "Po";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mortuary,
    Police,
}

impl Role {
    /// Codes issued to police stations start with `Po`; every other code
    /// belongs to a mortuary.
    pub fn from_generated_code(code: &str) -> Self {
        if code.starts_with(POLICE_CODE_PREFIX) {
            Role::Police
        } else {
            Role::Mortuary
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "police" => Some(Role::Police),
            "mortuary" => Some(Role::Mortuary),
            _ => None,
        }
    }

    pub fn verification_route(self) -> &'static str {
        match self {
            Role::Police => routes::POLICE_OTP_VERIFICATION,
            Role::Mortuary => routes::MORTUARY_OTP_VERIFICATION,
        }
    }
}

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub generated_code: String,
    pub phone_number: String,
    pub role: Role,
}

impl Session {
    /// `document.cookie` assignments for both session hints. Values must
    /// already be URI-component encoded.
    pub fn cookie_assignments(&self, encode: impl Fn(&str) -> String) -> [String; 2] {
        [
            session_cookie(GENERATED_CODE_COOKIE, &encode(&self.generated_code)),
            session_cookie(PHONE_NUMBER_COOKIE, &encode(&self.phone_number)),
        ]
    }
}

pub fn session_cookie(name: &str, encoded_value: &str) -> String {
    format!(
        "{}={}; max-age={}; path=/",
        name, encoded_value, SESSION_MAX_AGE_SECS
    )
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("unreadable login response: {0}")]
    Decode(String),
}
