//! Observable phases of the login form.

use super::{LoginError, Role, Session};

pub const SUCCESS_MESSAGE: &str = "Login successful!";
pub const FAILURE_MESSAGE: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    /// Success banner is up; navigation to the role's page follows.
    Succeeded(Role),
    /// Error banner is up; the form stays usable.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success,
    Failure,
}

impl Banner {
    pub fn message(self) -> &'static str {
        match self {
            Banner::Success => SUCCESS_MESSAGE,
            Banner::Failure => FAILURE_MESSAGE,
        }
    }
}

impl LoginPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, LoginPhase::Submitting)
    }

    pub fn banner(&self) -> Option<Banner> {
        match self {
            LoginPhase::Succeeded(_) => Some(Banner::Success),
            LoginPhase::Failed => Some(Banner::Failure),
            _ => None,
        }
    }
}

/// Current phase plus the number of the attempt that produced it.
///
/// Timers started for one attempt carry its number; a timer whose attempt has
/// been superseded leaves the phase alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginFlow {
    attempt: u32,
    phase: LoginPhase,
}

impl LoginFlow {
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Starts a new attempt. Refused while one is in flight or while the
    /// success banner waits for its redirect.
    pub fn submit(&mut self) -> bool {
        if matches!(self.phase, LoginPhase::Submitting | LoginPhase::Succeeded(_)) {
            return false;
        }
        self.attempt = self.attempt.wrapping_add(1);
        self.phase = LoginPhase::Submitting;
        true
    }

    /// Records the outcome of the current attempt and returns its number.
    /// Only the generic failure banner is shown; the reason is not surfaced.
    pub fn finish(&mut self, outcome: &Result<Session, LoginError>) -> u32 {
        self.phase = match outcome {
            Ok(session) => LoginPhase::Succeeded(session.role),
            Err(_) => LoginPhase::Failed,
        };
        self.attempt
    }

    /// Drops the banner of `attempt`. Returns `false` when a later attempt
    /// has taken over or no banner is up.
    pub fn clear(&mut self, attempt: u32) -> bool {
        if attempt != self.attempt
            || !matches!(self.phase, LoginPhase::Succeeded(_) | LoginPhase::Failed)
        {
            return false;
        }
        self.phase = LoginPhase::Idle;
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.phase.banner()
    }
}
