//! Roster file format.
//!
//! A roster lists technical leads with their engineers and business leads
//! with their accountants. Accountants name the technical lead they support.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A whole org chart, as written in a roster file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    /// Technical leads, hired in this order
    #[serde(default)]
    pub technical_leads: Vec<TechnicalLeadEntry>,

    /// Business leads, hired after every technical lead
    #[serde(default)]
    pub business_leads: Vec<BusinessLeadEntry>,
}

/// A technical lead and their engineers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnicalLeadEntry {
    /// Lead name; accountants refer to the lead by it
    pub name: String,

    /// Engineers to add as reports
    #[serde(default)]
    pub engineers: Vec<EngineerEntry>,
}

/// A software engineer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineerEntry {
    /// Engineer name
    pub name: String,

    /// Grant code access on hire
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub code_access: bool,
}

/// A business lead and their accountants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessLeadEntry {
    /// Lead name
    pub name: String,

    /// Accountants to add as reports
    #[serde(default)]
    pub accountants: Vec<AccountantEntry>,
}

/// An accountant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountantEntry {
    /// Accountant name
    pub name: String,

    /// Name of the technical lead this accountant supports
    pub supports: String,
}

impl EngineerEntry {
    /// Engineer without code access.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code_access: false,
        }
    }
}

impl AccountantEntry {
    /// Accountant supporting `supports`.
    pub fn new(name: impl Into<String>, supports: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supports: supports.into(),
        }
    }
}

impl Roster {
    /// Parse a roster from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a roster file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The built-in demonstration roster.
    pub fn sample() -> Self {
        let engineers = |names: &[&str]| -> Vec<EngineerEntry> {
            names.iter().map(|&n| EngineerEntry::new(n)).collect()
        };

        Self {
            technical_leads: vec![
                TechnicalLeadEntry {
                    name: "Satya Nadella".to_string(),
                    engineers: engineers(&["Kasey", "Breana", "Eric"]),
                },
                TechnicalLeadEntry {
                    name: "Bill Gates".to_string(),
                    engineers: engineers(&["Winter", "Libby", "Gizan", "Zaynah"]),
                },
            ],
            business_leads: vec![BusinessLeadEntry {
                name: "Amy Hood".to_string(),
                accountants: vec![
                    AccountantEntry::new("Niky", "Satya Nadella"),
                    AccountantEntry::new("Andrew", "Bill Gates"),
                ],
            }],
        }
    }

    /// Check that technical lead names are unique and every accountant
    /// supports a lead defined in this roster.
    pub fn validate(&self) -> Result<()> {
        let mut leads = HashSet::new();
        for lead in &self.technical_leads {
            if !leads.insert(lead.name.as_str()) {
                return Err(RosterError::DuplicateLead(lead.name.clone()));
            }
        }

        let unknown = self
            .business_leads
            .iter()
            .flat_map(|lead| &lead.accountants)
            .find(|accountant| !leads.contains(accountant.supports.as_str()));
        if let Some(accountant) = unknown {
            return Err(RosterError::UnknownLead(accountant.supports.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_roster() {
        let roster = Roster::from_json(
            r#"{
                "technical_leads": [
                    { "name": "Satya Nadella", "engineers": [ { "name": "Kasey", "code_access": true } ] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(roster.technical_leads.len(), 1);
        assert!(roster.technical_leads[0].engineers[0].code_access);
        assert!(roster.business_leads.is_empty());
    }

    #[test]
    fn test_empty_document_is_empty_roster() {
        assert_eq!(Roster::from_json("{}").unwrap(), Roster::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Roster::from_json(r#"{ "managers": [] }"#).unwrap_err();
        assert!(matches!(err, RosterError::Json(_)));
    }

    #[test]
    fn test_accountant_requires_supports() {
        let err = Roster::from_json(
            r#"{ "business_leads": [ { "name": "Amy Hood", "accountants": [ { "name": "Niky" } ] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = Roster::sample().to_json_pretty().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let roster = Roster::from_path(file.path()).unwrap();
        assert_eq!(roster, Roster::sample());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Roster::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_sample_is_valid() {
        let roster = Roster::sample();
        roster.validate().unwrap();
        assert_eq!(roster.technical_leads[1].engineers.len(), 4);
        assert_eq!(roster.business_leads[0].accountants[1].supports, "Bill Gates");
    }

    #[test]
    fn test_validate_duplicate_lead() {
        let mut roster = Roster::sample();
        roster.technical_leads[1].name = "Satya Nadella".to_string();

        let err = roster.validate().unwrap_err();
        assert!(matches!(err, RosterError::DuplicateLead(name) if name == "Satya Nadella"));
    }

    #[test]
    fn test_validate_unknown_lead() {
        let mut roster = Roster::sample();
        roster.business_leads[0].accountants[0].supports = "Steve Ballmer".to_string();

        let err = roster.validate().unwrap_err();
        assert!(matches!(err, RosterError::UnknownLead(name) if name == "Steve Ballmer"));
    }
}
