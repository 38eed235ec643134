//! Roster configuration for OrgChart.
//!
//! A roster is a JSON description of leads and their reports. Loading one
//! hires everybody into an [`orgchart_core::OrgChart`] in a fixed order.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod roster;

pub use error::{Result, RosterError};
pub use loader::{LoadedRoster, RejectedReport};
pub use roster::{AccountantEntry, BusinessLeadEntry, EngineerEntry, Roster, TechnicalLeadEntry};
