use crate::core::{Student, StudentKind, StudentRecord};
use std::collections::BTreeMap;
use std::fmt;

/// Head counts per kind plus the names enrolled in each department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub total: usize,
    pub undergraduate: usize,
    pub graduate: usize,
    pub doctoral: usize,
    pub departments: BTreeMap<String, Vec<String>>,
}

impl RosterSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a StudentRecord>) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.total += 1;
            match record.kind() {
                StudentKind::Undergraduate => summary.undergraduate += 1,
                StudentKind::Graduate => summary.graduate += 1,
                StudentKind::Doctoral => summary.doctoral += 1,
            }
            summary
                .departments
                .entry(record.department().to_string())
                .or_default()
                .push(record.full_name().to_string());
        }
        summary
    }

    pub fn count(&self, kind: StudentKind) -> usize {
        match kind {
            StudentKind::Undergraduate => self.undergraduate,
            StudentKind::Graduate => self.graduate,
            StudentKind::Doctoral => self.doctoral,
        }
    }
}

impl fmt::Display for RosterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Students: {}", self.total)?;
        writeln!(f, "  ├─ {}: {}", StudentKind::Undergraduate, self.undergraduate)?;
        writeln!(f, "  ├─ {}: {}", StudentKind::Graduate, self.graduate)?;
        writeln!(f, "  └─ {}: {}", StudentKind::Doctoral, self.doctoral)?;
        writeln!(f)?;
        write!(f, "Departments represented:")?;
        for (department, names) in &self.departments {
            write!(f, "\n  ├─ {}: {}", department, names.join(", "))?;
        }
        Ok(())
    }
}
