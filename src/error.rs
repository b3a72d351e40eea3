//! Error taxonomy for client operations.
//!
//! Only failures to talk to the service are errors. Whatever the server
//! declares (duplicates, rejections, unknown users) comes back as a
//! [`SubmissionResult`](crate::types::SubmissionResult) value.

use crate::types::Command;

/// Caller input that violates a command's required fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Insert/Update without an ADIF record.
    #[error("{0:?} requires a non-empty ADIF record")]
    MissingRecord(Command),
    /// Delete/Update without an ADIF key.
    #[error("{0:?} requires a non-empty ADIF key")]
    MissingKey(Command),
}

/// Failure of the HTTP POST itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request did not complete within its timeout.
    #[error("request timed out")]
    Timeout,
    /// Connection, TLS, or body read failure.
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-success HTTP status.
    #[error("server returned HTTP {0}")]
    Status(u16),
    /// The HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    Client(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else if let Some(status) = value.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Network(value.to_string())
        }
    }
}

/// The error type for all client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Rejected before any network activity.
    #[error("invalid request: {0}")]
    Contract(#[from] ContractError),
    /// No configured host answered the liveness probe.
    #[error("no configured host is reachable")]
    Connectivity,
    /// The POST failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// A convenience `Result` alias using [`ClientError`].
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_error_names_command() {
        let e = ClientError::from(ContractError::MissingKey(Command::Delete));
        assert_eq!(
            e.to_string(),
            "invalid request: Delete requires a non-empty ADIF key"
        );
    }

    #[test]
    fn transport_status_display() {
        let e = ClientError::from(TransportError::Status(500));
        assert_eq!(e.to_string(), "transport error: server returned HTTP 500");
    }

    #[test]
    fn connectivity_display() {
        assert_eq!(
            ClientError::Connectivity.to_string(),
            "no configured host is reachable"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<ClientError>();
    }
}
