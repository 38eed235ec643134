//! OrgChart core data model.
//!
//! Employees of four roles, leads with capped teams, accountants pointing
//! at the technical lead they support, and the status text rendered from
//! all of it. Everything lives in an [`OrgChart`] and is addressed by id.

#![warn(missing_docs)]

// Identity
mod id;

// Employees and roles
mod employee;
mod role;
mod status;

// Registry
mod chart;
mod error;
mod shared;

// Re-exports
pub use id::{AccountantId, BusinessLeadId, EmployeeId, EngineerId, IdGenerator, TechLeadId};

pub use employee::{Employee, Role, Team};
pub use role::{RoleKind, Salary};

pub use chart::{Lead, OrgChart};
pub use error::{OrgError, Result};
pub use shared::SharedOrgChart;
