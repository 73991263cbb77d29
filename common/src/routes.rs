//! Paths shared by the server and the client.

/// Proxy endpoints served by the backend.
pub const API_MISSING_PERSONS: &str = "/api/missingpersons";
pub const API_UNIDENTIFIED_BODIES: &str = "/api/unidentifiedbodies";
pub const API_NEXT_OF_KIN: &str = "/api/nextofkin";
pub const API_LOGIN: &str = "/api/login";

/// In-app pages.
pub const LOGIN: &str = "/login";
pub const UNIDENTIFIED_BODIES_DATA: &str = "/mortuary/unidentified-bodies-data";
pub const MISSING_PERSONS_DATA: &str = "/police/missing-persons-data";
pub const UNIDENTIFIED_BODY_FORM: &str = "/mortuary/unidentified_bodies/first-page-form";
pub const MISSING_PERSON_FORM: &str = "/police/missing_persons/first-page-form";
pub const POLICE_OTP_VERIFICATION: &str = "/police/otpVerification";
pub const MORTUARY_OTP_VERIFICATION: &str = "/mortuary/otpVerification";

/// The two record listings the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    UnidentifiedBodies,
    MissingPersons,
}

impl RecordKind {
    pub fn title(self) -> &'static str {
        match self {
            RecordKind::UnidentifiedBodies => "Unidentified Bodies",
            RecordKind::MissingPersons => "Missing Persons",
        }
    }

    /// Proxy endpoint serving this kind's records.
    pub fn api_path(self) -> &'static str {
        match self {
            RecordKind::UnidentifiedBodies => API_UNIDENTIFIED_BODIES,
            RecordKind::MissingPersons => API_MISSING_PERSONS,
        }
    }

    /// Where "+ Add Data" leads.
    pub fn add_form_route(self) -> &'static str {
        match self {
            RecordKind::UnidentifiedBodies => UNIDENTIFIED_BODY_FORM,
            RecordKind::MissingPersons => MISSING_PERSON_FORM,
        }
    }
}

/// Page selected from the browser location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Records(RecordKind),
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | LOGIN => Page::Login,
            UNIDENTIFIED_BODIES_DATA => Page::Records(RecordKind::UnidentifiedBodies),
            MISSING_PERSONS_DATA => Page::Records(RecordKind::MissingPersons),
            _ => Page::NotFound,
        }
    }
}
