//! Session identity, submission commands, and decoded outcomes.

use serde::{Deserialize, Serialize};

/// Station identity sent verbatim with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Station callsign.
    pub callsign: String,
    /// Upload code issued by the service at registration.
    pub upload_code: String,
    /// Submitting application name.
    pub app_name: String,
}

impl Session {
    /// Creates a session from its three identity fields.
    pub fn new(
        callsign: impl Into<String>,
        upload_code: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            callsign: callsign.into(),
            upload_code: upload_code.into(),
            app_name: app_name.into(),
        }
    }
}

/// QSO submission command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Add a new QSO. Requires a record.
    Insert,
    /// Remove a prior QSO. Requires a key.
    Delete,
    /// Replace a prior QSO. Requires both a key and a record.
    Update,
}

impl Command {
    /// Returns true when the command carries an ADIF record.
    pub fn needs_record(self) -> bool {
        matches!(self, Self::Insert | Self::Update)
    }

    /// Returns true when the command carries an ADIF key.
    pub fn needs_key(self) -> bool {
        matches!(self, Self::Delete | Self::Update)
    }

    /// Value of the `Cmd` form field, absent for inserts.
    pub fn wire_name(self) -> Option<&'static str> {
        match self {
            Self::Insert => None,
            Self::Delete => Some("DELETE"),
            Self::Update => Some("UPDATE"),
        }
    }

    /// Name of the success element the server replies with.
    pub fn reply_element(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::Update => "update",
        }
    }
}

/// Server-declared outcome of a QSO submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    /// Accepted and applied.
    Ok,
    /// Accepted but already present.
    Dupe,
    /// Rejected, or the reply could not be understood.
    Error,
    /// Callsign/upload code pair not recognized.
    UnknownUser,
}

/// Decoded reply to a QSO submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Outcome bucket.
    pub status: ResponseStatus,
    /// Record count or error text, when the server supplied one.
    pub message: Option<String>,
}

impl SubmissionResult {
    /// Builds a result with no message.
    pub fn bare(status: ResponseStatus) -> Self {
        Self {
            status,
            message: None,
        }
    }

    /// Returns true for `Ok` and `Dupe`.
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, ResponseStatus::Ok | ResponseStatus::Dupe)
    }
}
