//! Thread-safe handle to an org chart.

use std::sync::{Arc, Mutex};

use crate::chart::OrgChart;
use crate::error::{OrgError, Result};
use crate::id::{AccountantId, BusinessLeadId, EngineerId, TechLeadId};

/// An [`OrgChart`] behind a mutex, cloneable across threads.
///
/// Each call holds the lock for the whole operation, so the headcount check
/// and the append in `add_*_report` cannot interleave with another caller.
#[derive(Debug, Clone, Default)]
pub struct SharedOrgChart {
    inner: Arc<Mutex<OrgChart>>,
}

impl SharedOrgChart {
    /// Wrap an existing chart.
    pub fn new(chart: OrgChart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chart)),
        }
    }

    /// Run `f` with exclusive access to the chart.
    pub fn with<R>(&self, f: impl FnOnce(&mut OrgChart) -> R) -> Result<R> {
        let mut chart = self.inner.lock().map_err(|_| OrgError::Poisoned)?;
        Ok(f(&mut chart))
    }

    /// See [`OrgChart::add_engineer_report`].
    pub fn add_engineer_report(&self, lead: TechLeadId, engineer: EngineerId) -> Result<bool> {
        self.with(|chart| chart.add_engineer_report(lead, engineer))?
    }

    /// See [`OrgChart::add_accountant_report`].
    pub fn add_accountant_report(
        &self,
        lead: BusinessLeadId,
        accountant: AccountantId,
        supported: TechLeadId,
    ) -> Result<bool> {
        self.with(|chart| chart.add_accountant_report(lead, accountant, supported))?
    }

    /// Copy of the chart as it is now.
    pub fn snapshot(&self) -> Result<OrgChart> {
        self.with(|chart| chart.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_reports_respect_head_count() {
        let mut chart = OrgChart::new();
        let lead = chart.hire_technical_lead("Satya Nadella").unwrap();
        let engineers: Vec<_> = (0..16)
            .map(|i| chart.hire_software_engineer(format!("Engineer {}", i)).unwrap())
            .collect();

        let shared = SharedOrgChart::new(chart);
        let handles: Vec<_> = engineers
            .into_iter()
            .map(|engineer| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.add_engineer_report(lead, engineer).unwrap())
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|added| *added)
            .count();

        assert_eq!(accepted, 4);
        let chart = shared.snapshot().unwrap();
        assert_eq!(chart.engineers(lead).unwrap().len(), 4);
    }

    #[test]
    fn test_concurrent_accountant_reports() {
        let mut chart = OrgChart::new();
        let cto = chart.hire_technical_lead("Satya Nadella").unwrap();
        let cfo = chart.hire_business_lead("Amy Hood").unwrap();
        let accountants: Vec<_> = (0..12)
            .map(|i| chart.hire_accountant(format!("Accountant {}", i)).unwrap())
            .collect();

        let shared = SharedOrgChart::new(chart);
        let handles: Vec<_> = accountants
            .iter()
            .copied()
            .map(|accountant| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared.add_accountant_report(cfo, accountant, cto).unwrap()
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let chart = shared.snapshot().unwrap();
        let team = chart.accountants(cfo).unwrap();
        assert_eq!(team.len(), 5);
        for accountant in accountants {
            let expected = team.contains(&accountant).then_some(cto);
            assert_eq!(chart.team_supported(accountant).unwrap(), expected);
        }
    }

    #[test]
    fn test_with_gives_mutable_access() {
        let shared = SharedOrgChart::default();
        let kasey = shared.with(|chart| chart.hire_software_engineer("Kasey").unwrap()).unwrap();
        shared.with(|chart| chart.set_code_access(kasey, true)).unwrap().unwrap();

        assert!(shared.with(|chart| chart.check_in_code(kasey)).unwrap().unwrap());
    }
}
