use common::session::{LoginError, Role, Session};

pub enum Msg {
    UpdateCode(String),
    UpdatePhone(String),
    Submit,
    Finished(Result<Session, LoginError>),
    /// Fired after the success banner of the given attempt has been shown
    /// long enough.
    Redirect { role: Role, attempt: u32 },
    /// Error banner timeout of the given attempt.
    ClearBanner(u32),
}
