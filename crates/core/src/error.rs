//! Org chart errors.

use crate::id::EmployeeId;
use crate::role::RoleKind;

/// Result type for org chart operations.
pub type Result<T> = std::result::Result<T, OrgError>;

/// Errors raised when a handle does not resolve in the chart it is used
/// with, or when no more employees can be hired.
///
/// Running out of headcount is not an error; `add_*_report` returns `false`.
#[derive(Debug, thiserror::Error)]
pub enum OrgError {
    /// No employee with this id exists in the chart
    #[error("Unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    /// The id resolved to an employee of another role
    #[error("Employee {id} is a {actual}, expected a {expected}")]
    WrongRole {
        /// The offending id
        id: EmployeeId,
        /// Role the operation needed
        expected: RoleKind,
        /// Role the employee actually holds
        actual: RoleKind,
    },

    /// The id generator has no ids left to hand out
    #[error("Employee ids exhausted")]
    IdsExhausted,

    /// A thread panicked while holding the shared chart
    #[error("Org chart lock poisoned")]
    Poisoned,
}
