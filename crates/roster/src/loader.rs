//! Building an org chart from a roster.

use std::collections::HashMap;

use orgchart_core::{BusinessLeadId, OrgChart, TechLeadId};
use tracing::{info, warn};

use crate::error::{Result, RosterError};
use crate::roster::Roster;

/// A report the roster asked for that the lead had no headcount for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedReport {
    /// Lead the report was meant for
    pub lead: String,
    /// The report that was hired but left off the team
    pub report: String,
}

/// Result of applying a roster.
#[derive(Debug)]
pub struct LoadedRoster {
    /// The populated chart
    pub chart: OrgChart,
    /// Technical leads, in roster order
    pub technical_leads: Vec<TechLeadId>,
    /// Business leads, in roster order
    pub business_leads: Vec<BusinessLeadId>,
    /// Reports that did not fit on their lead's team
    pub rejected: Vec<RejectedReport>,
}

impl LoadedRoster {
    /// Every team status, technical leads first.
    pub fn team_statuses(&self) -> Result<Vec<String>> {
        let technical = self
            .technical_leads
            .iter()
            .map(|&lead| self.chart.team_status(lead));
        let business = self
            .business_leads
            .iter()
            .map(|&lead| self.chart.team_status(lead));

        let statuses = technical
            .chain(business)
            .collect::<orgchart_core::Result<Vec<_>>>()?;
        Ok(statuses)
    }
}

impl Roster {
    /// Hire everyone in a fresh chart.
    pub fn load(&self) -> Result<LoadedRoster> {
        self.load_into(OrgChart::new())
    }

    /// Hire everyone into `chart`.
    ///
    /// Each technical lead is hired followed by their engineers, then each
    /// business lead followed by their accountants. The roster is validated
    /// before anyone is hired.
    pub fn load_into(&self, mut chart: OrgChart) -> Result<LoadedRoster> {
        self.validate()?;

        let mut by_name = HashMap::new();
        let mut technical_leads = Vec::with_capacity(self.technical_leads.len());
        let mut business_leads = Vec::with_capacity(self.business_leads.len());
        let mut rejected = Vec::new();

        for entry in &self.technical_leads {
            let lead = chart.hire_technical_lead(&entry.name)?;
            by_name.insert(entry.name.as_str(), lead);
            technical_leads.push(lead);

            for engineer in &entry.engineers {
                let id = chart.hire_software_engineer(&engineer.name)?;
                if engineer.code_access {
                    chart.set_code_access(id, true)?;
                }
                if !chart.add_engineer_report(lead, id)? {
                    warn!(lead = %entry.name, engineer = %engineer.name, "no headcount left");
                    rejected.push(RejectedReport {
                        lead: entry.name.clone(),
                        report: engineer.name.clone(),
                    });
                }
            }
        }

        for entry in &self.business_leads {
            let lead = chart.hire_business_lead(&entry.name)?;
            business_leads.push(lead);

            for accountant in &entry.accountants {
                let supported = by_name
                    .get(accountant.supports.as_str())
                    .copied()
                    .ok_or_else(|| RosterError::UnknownLead(accountant.supports.clone()))?;

                let id = chart.hire_accountant(&accountant.name)?;
                if !chart.add_accountant_report(lead, id, supported)? {
                    warn!(lead = %entry.name, accountant = %accountant.name, "no headcount left");
                    rejected.push(RejectedReport {
                        lead: entry.name.clone(),
                        report: accountant.name.clone(),
                    });
                }
            }
        }

        info!(
            employees = chart.len(),
            rejected = rejected.len(),
            "roster loaded"
        );

        Ok(LoadedRoster {
            chart,
            technical_leads,
            business_leads,
            rejected,
        })
    }
}
