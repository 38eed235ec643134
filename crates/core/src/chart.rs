//! Org chart registry - owns every employee and the links between them.
//!
//! Employees refer to each other by id only. A lead's team is a list of
//! ids, and an accountant's supported team is a [`TechLeadId`], so no
//! employee ever owns another.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::employee::{Employee, Role, Team};
use crate::error::{OrgError, Result};
use crate::id::{AccountantId, BusinessLeadId, EmployeeId, EngineerId, IdGenerator, TechLeadId};
use crate::role::RoleKind;
use crate::status;

/// Handle to an employee who manages a team.
pub trait Lead: Copy + Into<EmployeeId> {
    /// Role this handle refers to.
    const KIND: RoleKind;
}

impl Lead for TechLeadId {
    const KIND: RoleKind = RoleKind::TechnicalLead;
}

impl Lead for BusinessLeadId {
    const KIND: RoleKind = RoleKind::BusinessLead;
}

/// In-memory org chart.
#[derive(Debug, Clone)]
pub struct OrgChart {
    ids: Arc<IdGenerator>,
    employees: BTreeMap<EmployeeId, Employee>,
}

impl OrgChart {
    /// Empty chart with its own id generator starting at 1.
    pub fn new() -> Self {
        Self::with_ids(Arc::new(IdGenerator::new()))
    }

    /// Empty chart drawing ids from a shared generator.
    pub fn with_ids(ids: Arc<IdGenerator>) -> Self {
        Self {
            ids,
            employees: BTreeMap::new(),
        }
    }

    fn hire(&mut self, name: impl Into<String>, kind: RoleKind) -> Result<EmployeeId> {
        let id = self.ids.next_id().ok_or(OrgError::IdsExhausted)?;
        let employee = Employee::new(id, name.into(), kind);
        trace!(%id, name = employee.name(), role = %kind, "hired employee");
        self.employees.insert(id, employee);
        Ok(id)
    }

    /// Hire a software engineer (no code access).
    pub fn hire_software_engineer(&mut self, name: impl Into<String>) -> Result<EngineerId> {
        self.hire(name, RoleKind::SoftwareEngineer).map(EngineerId::new)
    }

    /// Hire a technical lead with an empty team.
    pub fn hire_technical_lead(&mut self, name: impl Into<String>) -> Result<TechLeadId> {
        self.hire(name, RoleKind::TechnicalLead).map(TechLeadId::new)
    }

    /// Hire an accountant supporting no team.
    pub fn hire_accountant(&mut self, name: impl Into<String>) -> Result<AccountantId> {
        self.hire(name, RoleKind::Accountant).map(AccountantId::new)
    }

    /// Hire a business lead with an empty team.
    pub fn hire_business_lead(&mut self, name: impl Into<String>) -> Result<BusinessLeadId> {
        self.hire(name, RoleKind::BusinessLead).map(BusinessLeadId::new)
    }

    // === Lookup ===

    /// Look up an employee, if present.
    pub fn get(&self, id: impl Into<EmployeeId>) -> Option<&Employee> {
        self.employees.get(&id.into())
    }

    /// Look up an employee.
    pub fn employee(&self, id: impl Into<EmployeeId>) -> Result<&Employee> {
        let id = id.into();
        self.employees.get(&id).ok_or(OrgError::UnknownEmployee(id))
    }

    /// All employees in hire order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// First employee hired under `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.employees.values().find(|e| e.name() == name)
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether nobody has been hired yet.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn expect_kind(&self, id: EmployeeId, expected: RoleKind) -> Result<()> {
        let actual = self.employee(id)?.kind();
        if actual != expected {
            return Err(OrgError::WrongRole { id, expected, actual });
        }
        Ok(())
    }

    fn role_mut(&mut self, id: EmployeeId) -> Result<&mut Role> {
        self.employees
            .get_mut(&id)
            .map(Employee::role_mut)
            .ok_or(OrgError::UnknownEmployee(id))
    }

    // === Software engineers ===

    /// Whether the engineer may check in code.
    pub fn code_access(&self, engineer: EngineerId) -> Result<bool> {
        let id = engineer.into();
        match self.employee(id)?.role() {
            Role::SoftwareEngineer { code_access } => Ok(*code_access),
            other => Err(OrgError::WrongRole {
                id,
                expected: RoleKind::SoftwareEngineer,
                actual: other.kind(),
            }),
        }
    }

    /// Grant or revoke code access.
    pub fn set_code_access(&mut self, engineer: EngineerId, access: bool) -> Result<()> {
        let id = engineer.into();
        match self.role_mut(id)? {
            Role::SoftwareEngineer { code_access } => {
                *code_access = access;
                Ok(())
            }
            other => Err(OrgError::WrongRole {
                id,
                expected: RoleKind::SoftwareEngineer,
                actual: other.kind(),
            }),
        }
    }

    /// Whether a check-in by this engineer goes through.
    pub fn check_in_code(&self, engineer: EngineerId) -> Result<bool> {
        self.code_access(engineer)
    }

    // === Teams ===

    /// A lead's team.
    pub fn team<L: Lead>(&self, lead: L) -> Result<&Team> {
        let id = lead.into();
        let role = self.employee(id)?.role();
        match role.team() {
            Some(team) if role.kind() == L::KIND => Ok(team),
            _ => Err(OrgError::WrongRole {
                id,
                expected: L::KIND,
                actual: role.kind(),
            }),
        }
    }

    fn team_mut<L: Lead>(&mut self, lead: L) -> Result<&mut Team> {
        let id = lead.into();
        let role = self.role_mut(id)?;
        let actual = role.kind();
        match role.team_mut() {
            Some(team) if actual == L::KIND => Ok(team),
            _ => Err(OrgError::WrongRole {
                id,
                expected: L::KIND,
                actual,
            }),
        }
    }

    /// Maximum number of reports the lead may have.
    pub fn head_count<L: Lead>(&self, lead: L) -> Result<usize> {
        Ok(self.team(lead)?.head_count())
    }

    /// Whether the lead can take another report.
    pub fn has_head_count<L: Lead>(&self, lead: L) -> Result<bool> {
        Ok(self.team(lead)?.has_head_count())
    }

    /// Engineers reporting to a technical lead, in the order they were added.
    pub fn engineers(&self, lead: TechLeadId) -> Result<Vec<EngineerId>> {
        Ok(self.team(lead)?.members().iter().copied().map(EngineerId::new).collect())
    }

    /// Accountants reporting to a business lead, in the order they were added.
    pub fn accountants(&self, lead: BusinessLeadId) -> Result<Vec<AccountantId>> {
        Ok(self.team(lead)?.members().iter().copied().map(AccountantId::new).collect())
    }

    /// Add an engineer to a technical lead's team.
    ///
    /// Returns `false` without changing anything when the lead has no
    /// headcount left. The same engineer may be added more than once.
    pub fn add_engineer_report(&mut self, lead: TechLeadId, engineer: EngineerId) -> Result<bool> {
        self.expect_kind(engineer.into(), RoleKind::SoftwareEngineer)?;
        let added = self.team_mut(lead)?.try_push(engineer.into());
        if added {
            debug!(%lead, %engineer, "engineer joined team");
        }
        Ok(added)
    }

    /// Add an accountant to a business lead's team and point them at the
    /// technical lead they will support.
    ///
    /// On success the accountant's previous supported team is replaced.
    /// Returns `false` without changing anything when the lead has no
    /// headcount left.
    pub fn add_accountant_report(
        &mut self,
        lead: BusinessLeadId,
        accountant: AccountantId,
        supported: TechLeadId,
    ) -> Result<bool> {
        self.expect_kind(accountant.into(), RoleKind::Accountant)?;
        self.expect_kind(supported.into(), RoleKind::TechnicalLead)?;

        if !self.team_mut(lead)?.try_push(accountant.into()) {
            return Ok(false);
        }
        debug!(%lead, %accountant, "accountant joined team");
        self.support_team(accountant, supported)?;
        Ok(true)
    }

    // === Accountants ===

    /// The technical lead this accountant supports, if any.
    pub fn team_supported(&self, accountant: AccountantId) -> Result<Option<TechLeadId>> {
        let id = accountant.into();
        match self.employee(id)?.role() {
            Role::Accountant { team_supported } => Ok(*team_supported),
            other => Err(OrgError::WrongRole {
                id,
                expected: RoleKind::Accountant,
                actual: other.kind(),
            }),
        }
    }

    /// Point an accountant at a technical lead, replacing any previous one.
    pub fn support_team(&mut self, accountant: AccountantId, lead: TechLeadId) -> Result<()> {
        self.expect_kind(lead.into(), RoleKind::TechnicalLead)?;

        let id = accountant.into();
        match self.role_mut(id)? {
            Role::Accountant { team_supported } => *team_supported = Some(lead),
            other => {
                return Err(OrgError::WrongRole {
                    id,
                    expected: RoleKind::Accountant,
                    actual: other.kind(),
                })
            }
        }
        debug!(%accountant, %lead, "accountant supporting team");
        Ok(())
    }

    // === Status ===

    /// Status line for any employee, ending in their role clause.
    pub fn employee_status(&self, id: impl Into<EmployeeId>) -> Result<String> {
        let employee = self.employee(id)?;
        let base = employee.base_status();

        Ok(match employee.role() {
            Role::SoftwareEngineer { .. } => status::software_engineer(base),
            Role::TechnicalLead { .. } => status::technical_lead(base),
            Role::Accountant { team_supported } => {
                let supported = team_supported
                    .and_then(|lead| self.get(lead))
                    .map(Employee::name);
                status::accountant(base, supported)
            }
            Role::BusinessLead { .. } => status::business_lead(base),
        })
    }

    /// The lead's status followed by one line per report.
    pub fn team_status<L: Lead>(&self, lead: L) -> Result<String> {
        let members = self
            .team(lead)?
            .members()
            .iter()
            .map(|&member| self.employee_status(member))
            .collect::<Result<Vec<_>>>()?;

        let noun = L::KIND.report_noun().unwrap_or("reports");
        Ok(status::team(self.employee_status(lead)?, noun, members))
    }
}

impl Default for OrgChart {
    fn default() -> Self {
        Self::new()
    }
}
