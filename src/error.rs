//! Defines the crate level error type and the messages shown at the user boundary.

/// The errors that may occur while loading or assembling a view.
///
/// Category lookups that miss and degenerate inputs (zero income, empty
/// transaction sets) are never reported through this type, they are recovered
/// locally by the engines.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transport could not complete a request, e.g. a network failure or
    /// a server error.
    ///
    /// The string should only be logged for debugging. When communicating with
    /// the user, use [Error::user_message].
    #[error("the transport request failed: {0}")]
    TransportFailure(String),

    /// The transport rejected the request because the session is no longer
    /// authorised (unauthorized/forbidden).
    ///
    /// Callers should start a log out or re-authentication flow.
    #[error("the session has expired")]
    SessionExpired,

    /// The data file backing a [crate::FixtureTransport] could not be read or parsed.
    #[error("could not load the data file: {0}")]
    InvalidDataFile(String),

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A filter option (transaction type, sort field or sort order) was not recognised.
    #[error("invalid filter criteria: {0}")]
    InvalidCriteria(String),

    /// An error occurred while serializing a view-model as JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerialization(String),
}

impl Error {
    /// Map a transport status code and message to an error.
    ///
    /// 401 (unauthorized) and 403 (forbidden) mean the session has expired,
    /// every other status is an opaque transport failure.
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            401 | 403 => Error::SessionExpired,
            _ => Error::TransportFailure(format!("status {status}: {message}")),
        }
    }

    /// Whether the caller should send the user back through authentication.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::SessionExpired)
    }

    /// The single human readable message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Error::SessionExpired => "Session is expired. Please log in again.".to_owned(),
            Error::TransportFailure(_) => "Failed to fetch data. Please try again.".to_owned(),
            Error::InvalidDataFile(reason) => format!("Could not load the data file: {reason}"),
            Error::InvalidCriteria(reason) => format!("Invalid search options: {reason}"),
            Error::InvalidDate(date) => {
                format!("\"{date}\" is not a valid date. Use the format YYYY-MM-DD.")
            }
            // Any errors that are not handled above are not intended to be shown to the user.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                "Something went wrong. Please try again.".to_owned()
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JsonSerialization(value.to_string())
    }
}
