//! Roster errors.

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors that can occur while reading or applying a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An accountant supports a technical lead the roster does not define
    #[error("Unknown technical lead: {0}")]
    UnknownLead(String),

    /// Two technical leads share a name, so `supports` would be ambiguous
    #[error("Duplicate technical lead: {0}")]
    DuplicateLead(String),

    /// Org chart operation failed
    #[error("Org chart error: {0}")]
    Org(#[from] orgchart_core::OrgError),
}
