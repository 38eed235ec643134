//! Employee model - shared identity plus a role-specific payload.

use crate::id::{EmployeeId, TechLeadId};
use crate::role::{RoleKind, Salary};

/// An employee of any role.
///
/// Identity fields are fixed at hire time; only the role payload changes
/// afterwards, and only through [`OrgChart`](crate::OrgChart) operations.
#[derive(Debug, Clone)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    base_salary: Salary,
    role: Role,
}

impl Employee {
    pub(crate) fn new(id: EmployeeId, name: String, kind: RoleKind) -> Self {
        Self {
            id,
            name,
            base_salary: kind.base_salary(),
            role: Role::for_kind(kind),
        }
    }

    /// Unique id.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base salary.
    pub fn base_salary(&self) -> Salary {
        self.base_salary
    }

    /// Role payload.
    pub fn role(&self) -> &Role {
        &self.role
    }

    pub(crate) fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    /// Which role this employee holds.
    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    /// `"<id> <name> with a salary of <salary>"`, before any role clause.
    pub fn base_status(&self) -> String {
        format!("{} with a salary of {}", self, self.base_salary)
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// Role-specific state.
#[derive(Debug, Clone)]
pub enum Role {
    /// Software engineer.
    SoftwareEngineer {
        /// Whether the engineer may check in code.
        code_access: bool,
    },
    /// Technical lead and their engineers.
    TechnicalLead {
        /// Engineer reports.
        team: Team,
    },
    /// Accountant.
    Accountant {
        /// Technical lead whose team this accountant supports.
        team_supported: Option<TechLeadId>,
    },
    /// Business lead and their accountants.
    BusinessLead {
        /// Accountant reports.
        team: Team,
    },
}

impl Role {
    fn for_kind(kind: RoleKind) -> Self {
        let team = || Team::new(kind.head_count().unwrap_or_default());
        match kind {
            RoleKind::SoftwareEngineer => Role::SoftwareEngineer { code_access: false },
            RoleKind::TechnicalLead => Role::TechnicalLead { team: team() },
            RoleKind::Accountant => Role::Accountant {
                team_supported: None,
            },
            RoleKind::BusinessLead => Role::BusinessLead { team: team() },
        }
    }

    /// Which role this payload belongs to.
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::SoftwareEngineer { .. } => RoleKind::SoftwareEngineer,
            Role::TechnicalLead { .. } => RoleKind::TechnicalLead,
            Role::Accountant { .. } => RoleKind::Accountant,
            Role::BusinessLead { .. } => RoleKind::BusinessLead,
        }
    }

    /// The managed team, for lead roles.
    pub fn team(&self) -> Option<&Team> {
        match self {
            Role::TechnicalLead { team } | Role::BusinessLead { team } => Some(team),
            _ => None,
        }
    }

    pub(crate) fn team_mut(&mut self) -> Option<&mut Team> {
        match self {
            Role::TechnicalLead { team } | Role::BusinessLead { team } => Some(team),
            _ => None,
        }
    }
}

/// Direct reports of a lead, capped at a fixed headcount.
///
/// Members keep insertion order and are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    head_count: usize,
    members: Vec<EmployeeId>,
}

impl Team {
    /// Empty team with room for `head_count` reports.
    pub fn new(head_count: usize) -> Self {
        Self {
            head_count,
            members: Vec::new(),
        }
    }

    /// Maximum number of reports.
    pub fn head_count(&self) -> usize {
        self.head_count
    }

    /// Whether another report fits.
    pub fn has_head_count(&self) -> bool {
        self.members.len() < self.head_count
    }

    /// Append `member` if headcount remains. Duplicates are not rejected.
    pub(crate) fn try_push(&mut self, member: EmployeeId) -> bool {
        if !self.has_head_count() {
            return false;
        }
        self.members.push(member);
        true
    }

    /// Reports in the order they were added.
    pub fn members(&self) -> &[EmployeeId] {
        &self.members
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether there are no reports yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
