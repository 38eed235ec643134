//! Roles - fixed salaries, headcounts and status wording per role.

/// A base salary.
///
/// Always displayed with at least one fractional digit (`70000.0`), and
/// with full precision otherwise (`85000.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Salary(f64);

impl Salary {
    /// Wrap a raw amount.
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Raw amount.
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Salary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The four roles an employee can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// Individual contributor reporting to a technical lead.
    SoftwareEngineer,
    /// Manages software engineers.
    TechnicalLead,
    /// Supports a technical lead's team; reports to a business lead.
    Accountant,
    /// Manages accountants.
    BusinessLead,
}

impl RoleKind {
    /// Base salary every employee of this role is hired at.
    pub fn base_salary(self) -> Salary {
        match self {
            RoleKind::SoftwareEngineer => Salary::new(70_000.0),
            RoleKind::TechnicalLead => Salary::new(100_000.0),
            RoleKind::Accountant => Salary::new(85_000.0),
            RoleKind::BusinessLead => Salary::new(120_000.0),
        }
    }

    /// Maximum number of direct reports, for roles that manage a team.
    pub fn head_count(self) -> Option<usize> {
        match self {
            RoleKind::TechnicalLead => Some(4),
            RoleKind::BusinessLead => Some(5),
            RoleKind::SoftwareEngineer | RoleKind::Accountant => None,
        }
    }

    /// Plural noun used in the team status header.
    pub fn report_noun(self) -> Option<&'static str> {
        match self {
            RoleKind::TechnicalLead => Some("engineers"),
            RoleKind::BusinessLead => Some("accountants"),
            RoleKind::SoftwareEngineer | RoleKind::Accountant => None,
        }
    }

    /// Human-readable role name.
    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::SoftwareEngineer => "Software Engineer",
            RoleKind::TechnicalLead => "Technical Lead",
            RoleKind::Accountant => "Accountant",
            RoleKind::BusinessLead => "Business Lead",
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_display() {
        assert_eq!(Salary::new(70_000.0).to_string(), "70000.0");
        assert_eq!(Salary::new(85_000.5).to_string(), "85000.5");
        assert_eq!(Salary::new(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_role_table() {
        assert_eq!(RoleKind::SoftwareEngineer.base_salary().amount(), 70_000.0);
        assert_eq!(RoleKind::TechnicalLead.base_salary().amount(), 100_000.0);
        assert_eq!(RoleKind::Accountant.base_salary().amount(), 85_000.0);
        assert_eq!(RoleKind::BusinessLead.base_salary().amount(), 120_000.0);

        assert_eq!(RoleKind::TechnicalLead.head_count(), Some(4));
        assert_eq!(RoleKind::BusinessLead.head_count(), Some(5));
        assert_eq!(RoleKind::Accountant.head_count(), None);
    }

    #[test]
    fn test_role_names() {
        assert_eq!(RoleKind::BusinessLead.to_string(), "Business Lead");
        assert_eq!(RoleKind::TechnicalLead.report_noun(), Some("engineers"));
        assert_eq!(RoleKind::BusinessLead.report_noun(), Some("accountants"));
    }
}
