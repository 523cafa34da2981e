use serde::{Deserialize, Serialize};
use std::fmt;

/// The only message the dashboard ever shows for a failed load.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str =
    "Unable to connect to backend. Set the backend URL.";

/// Categorization of dashboard load failures.
///
/// Kept for logging only; every kind is shown to the user as the same
/// [`BACKEND_UNAVAILABLE_MESSAGE`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The backend base URL plus path did not form a valid URL.
    InvalidUrl,
    /// The request never produced a response (DNS, refused, CORS, ...).
    Transport,
    /// The backend answered with a non-2xx status.
    Status,
    /// The body was not the JSON shape we expected.
    Decode,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErrorKind::InvalidUrl => write!(f, "InvalidUrl"),
            LoadErrorKind::Transport => write!(f, "Transport"),
            LoadErrorKind::Status => write!(f, "Status"),
            LoadErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// A failed request against one of the backend endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    /// Path of the endpoint that failed, e.g. `/tasks`.
    pub endpoint: String,
    pub message: String,
}

impl LoadError {
    fn new(kind: LoadErrorKind, endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn invalid_url(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LoadErrorKind::InvalidUrl, endpoint, message)
    }

    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LoadErrorKind::Transport, endpoint, message)
    }

    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::new(
            LoadErrorKind::Status,
            endpoint,
            format!("backend responded with HTTP {}", status),
        )
    }

    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LoadErrorKind::Decode, endpoint, message)
    }

    /// Text shown to the user. Identical for every kind and endpoint.
    pub fn user_message(&self) -> &'static str {
        BACKEND_UNAVAILABLE_MESSAGE
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.endpoint, self.message)
    }
}

impl std::error::Error for LoadError {}
