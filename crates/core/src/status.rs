//! Status text composition.
//!
//! Each role appends its own clause to the status already built for it, so
//! the base text always comes first and the role clause last.

/// Clause appended for a software engineer.
pub fn software_engineer(base: String) -> String {
    base + " as a Software Engineer."
}

/// Clause appended for a technical lead.
pub fn technical_lead(base: String) -> String {
    base + " as a Technical Lead."
}

/// Clause appended for an accountant, naming the supported lead if any.
pub fn accountant(base: String, supported_lead: Option<&str>) -> String {
    format!("{} supporting {}", base, supported_lead.unwrap_or("no team"))
}

/// Clause appended for a business lead.
pub fn business_lead(base: String) -> String {
    base + " as a Business Lead."
}

/// A lead's status followed by one line per report.
pub fn team<I, S>(lead_status: String, noun: &str, member_statuses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = format!("{} managing the following {}:\n", lead_status, noun);
    for status in member_statuses {
        out.push_str(" - ");
        out.push_str(status.as_ref());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_clauses() {
        let base = || "1 Kasey with a salary of 70000.0".to_string();
        assert_eq!(
            software_engineer(base()),
            "1 Kasey with a salary of 70000.0 as a Software Engineer."
        );
        assert!(technical_lead(base()).ends_with(" as a Technical Lead."));
        assert!(business_lead(base()).ends_with(" as a Business Lead."));
    }

    #[test]
    fn test_accountant_clause() {
        let base = "3 Niky with a salary of 85000.0".to_string();
        assert_eq!(
            accountant(base.clone(), Some("Satya Nadella")),
            "3 Niky with a salary of 85000.0 supporting Satya Nadella"
        );
        assert_eq!(
            accountant(base, None),
            "3 Niky with a salary of 85000.0 supporting no team"
        );
    }

    #[test]
    fn test_team_lines() {
        let out = team("LEAD".to_string(), "engineers", ["A", "B"]);
        assert_eq!(out, "LEAD managing the following engineers:\n - A\n - B\n");

        let empty = team("LEAD".to_string(), "accountants", Vec::<String>::new());
        assert_eq!(empty, "LEAD managing the following accountants:\n");
    }
}
