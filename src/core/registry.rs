use crate::core::summary::RosterSummary;
use crate::core::{Student, StudentKind, StudentRecord};
use crate::utils::error::{RecordsError, Result};

/// Ordered, in-memory collection of student records keyed by student ID.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    records: Vec<StudentRecord>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Student IDs must be unique within the registry.
    pub fn add(&mut self, record: impl Into<StudentRecord>) -> Result<()> {
        let record = record.into();
        if self.position(record.student_id()).is_some() {
            tracing::warn!("Rejected duplicate student ID {}", record.student_id());
            return Err(RecordsError::DuplicateStudentId {
                student_id: record.student_id().to_string(),
            });
        }
        tracing::debug!(
            student_id = %record.student_id(),
            kind = %record.kind(),
            "Registered student"
        );
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, student_id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.student_id() == student_id)
    }

    pub fn get_mut(&mut self, student_id: &str) -> Option<&mut StudentRecord> {
        self.records.iter_mut().find(|r| r.student_id() == student_id)
    }

    pub fn remove(&mut self, student_id: &str) -> Result<StudentRecord> {
        let index = self
            .position(student_id)
            .ok_or_else(|| RecordsError::StudentNotFound {
                student_id: student_id.to_string(),
            })?;
        tracing::debug!(student_id, "Removed student");
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    pub fn by_department<'a>(
        &'a self,
        department: &'a str,
    ) -> impl Iterator<Item = &'a StudentRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.department() == department)
    }

    pub fn by_kind(&self, kind: StudentKind) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter().filter(move |r| r.kind() == kind)
    }

    pub fn count_by_kind(&self, kind: StudentKind) -> usize {
        self.by_kind(kind).count()
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary::from_records(&self.records)
    }

    fn position(&self, student_id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.student_id() == student_id)
    }
}

impl<'a> IntoIterator for &'a StudentRegistry {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StudentIdentity;
    use crate::domain::doctoral::DoctoralStudent;
    use crate::domain::graduate::GraduateStudent;
    use crate::domain::undergraduate::UndergraduateStudent;

    fn registry() -> StudentRegistry {
        let mut registry = StudentRegistry::new();
        registry
            .add(UndergraduateStudent::new(
                StudentIdentity::new(
                    "20231001",
                    "Ahmet Yilmaz",
                    "ahmet@uni.edu",
                    "Computer Science",
                    2022,
                ),
                3,
                3.45,
            ))
            .unwrap();
        registry
            .add(UndergraduateStudent::new(
                StudentIdentity::new(
                    "20231002",
                    "Zeynep Kaya",
                    "zeynep@uni.edu",
                    "Mathematics",
                    2023,
                ),
                2,
                3.87,
            ))
            .unwrap();
        registry
            .add(GraduateStudent::new(
                StudentIdentity::new(
                    "20201101",
                    "Mehmet Ozturk",
                    "mehmet@uni.edu",
                    "Computer Science",
                    2022,
                ),
                "Machine Learning Applications in Healthcare",
                "Prof. Dr. Ali Demir",
            ))
            .unwrap();
        registry
            .add(DoctoralStudent::new(
                StudentIdentity::new(
                    "20191001",
                    "Fatima Hassan",
                    "fatima@uni.edu",
                    "Physics",
                    2019,
                ),
                "Quantum Computing and Cryptography",
                "Quantum Information Science",
                8,
            ))
            .unwrap();
        registry
    }

    #[test]
    fn test_preserves_insertion_order() {
        let registry = registry();
        let ids: Vec<&str> = registry.iter().map(|r| r.student_id()).collect();
        assert_eq!(ids, vec!["20231001", "20231002", "20201101", "20191001"]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut registry = registry();
        let duplicate = GraduateStudent::new(
            StudentIdentity::new("20231001", "Someone Else", "else@uni.edu", "Biology", 2024),
            "Title",
            "Advisor",
        );
        let err = registry.add(duplicate).unwrap_err();
        assert!(matches!(err, RecordsError::DuplicateStudentId { .. }));
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get("20231001").unwrap().full_name(), "Ahmet Yilmaz");
    }

    #[test]
    fn test_get_mut_applies_validated_updates() {
        let mut registry = registry();
        let record = registry.get_mut("20231001").unwrap();
        let student = record.as_undergraduate_mut().unwrap();
        student.set_gpa(3.67).unwrap();
        assert!(student.set_gpa(4.5).is_err());
        assert_eq!(
            registry.get("20231001").unwrap().student_status(),
            "Junior - GPA: 3.67"
        );
    }

    #[test]
    fn test_remove() {
        let mut registry = registry();
        let removed = registry.remove("20201101").unwrap();
        assert_eq!(removed.kind(), StudentKind::Graduate);
        assert_eq!(registry.len(), 3);
        assert!(registry.get("20201101").is_none());
        assert!(matches!(
            registry.remove("20201101"),
            Err(RecordsError::StudentNotFound { .. })
        ));
    }

    #[test]
    fn test_filters() {
        let registry = registry();
        let cs: Vec<&str> = registry
            .by_department("Computer Science")
            .map(|r| r.full_name())
            .collect();
        assert_eq!(cs, vec!["Ahmet Yilmaz", "Mehmet Ozturk"]);
        assert_eq!(registry.by_department("History").count(), 0);
        assert_eq!(registry.count_by_kind(StudentKind::Undergraduate), 2);
        assert_eq!(registry.count_by_kind(StudentKind::Graduate), 1);
        assert_eq!(registry.count_by_kind(StudentKind::Doctoral), 1);
    }

    #[test]
    fn test_summary() {
        let summary = registry().summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(StudentKind::Undergraduate), 2);
        assert_eq!(summary.count(StudentKind::Graduate), 1);
        assert_eq!(summary.count(StudentKind::Doctoral), 1);
        assert_eq!(
            summary.to_string(),
            "Total Students: 4\n\
             \x20 ├─ Undergraduate: 2\n\
             \x20 ├─ Graduate (Master's): 1\n\
             \x20 └─ Doctoral (PhD): 1\n\
             \n\
             Departments represented:\n\
             \x20 ├─ Computer Science: Ahmet Yilmaz, Mehmet Ozturk\n\
             \x20 ├─ Mathematics: Zeynep Kaya\n\
             \x20 ├─ Physics: Fatima Hassan"
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = StudentRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.summary(), RosterSummary::default());
    }
}
