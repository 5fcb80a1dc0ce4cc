use crate::domain::clock::Clock;
use crate::domain::model::{StudentIdentity, StudentKind};
use crate::domain::ports::Student;
use crate::utils::error::{Result, ValidationResult};
use crate::utils::validation::{validate_count, validate_non_empty_string, Validate};

#[derive(Debug, Clone, PartialEq)]
pub struct DoctoralStudent {
    identity: StudentIdentity,
    dissertation_topic: String,
    research_area: String,
    publication_count: u32,
}

impl DoctoralStudent {
    pub fn new(
        identity: StudentIdentity,
        dissertation_topic: impl Into<String>,
        research_area: impl Into<String>,
        publication_count: u32,
    ) -> Self {
        Self {
            identity,
            dissertation_topic: dissertation_topic.into(),
            research_area: research_area.into(),
            publication_count,
        }
    }

    pub fn dissertation_topic(&self) -> &str {
        &self.dissertation_topic
    }

    pub fn research_area(&self) -> &str {
        &self.research_area
    }

    pub fn publication_count(&self) -> u32 {
        self.publication_count
    }

    pub fn set_dissertation_topic(&mut self, topic: &str) -> ValidationResult<()> {
        validate_non_empty_string("dissertation_topic", topic)
            .inspect_err(|e| self.identity.log_rejection(e))?;
        self.dissertation_topic = topic.to_string();
        Ok(())
    }

    pub fn set_research_area(&mut self, area: &str) -> ValidationResult<()> {
        validate_non_empty_string("research_area", area)
            .inspect_err(|e| self.identity.log_rejection(e))?;
        self.research_area = area.to_string();
        Ok(())
    }

    pub fn set_publication_count(&mut self, count: i64) -> ValidationResult<()> {
        let count = validate_count("publication_count", count)
            .inspect_err(|e| self.identity.log_rejection(e))?;
        self.publication_count = count;
        Ok(())
    }

    pub fn add_publication(&mut self) {
        self.publication_count = self.publication_count.saturating_add(1);
    }
}

impl Student for DoctoralStudent {
    fn identity(&self) -> &StudentIdentity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut StudentIdentity {
        &mut self.identity
    }

    fn kind(&self) -> StudentKind {
        StudentKind::Doctoral
    }

    fn student_status_at(&self, clock: &dyn Clock) -> String {
        format!(
            "PhD Student - {} years enrolled - Publications: {}",
            self.years_enrolled_at(clock),
            self.publication_count
        )
    }

    fn display_info_at(&self, clock: &dyn Clock) -> String {
        format!(
            "{}\n--- PhD Student ---\nDissertation Topic: {}\nResearch Area: {}\n\
             Publications: {}\nStatus: {}",
            self.identity,
            self.dissertation_topic,
            self.research_area,
            self.publication_count,
            self.student_status_at(clock)
        )
    }
}

impl Validate for DoctoralStudent {
    fn validate(&self) -> Result<()> {
        self.identity.validate()?;
        validate_non_empty_string("dissertation_topic", &self.dissertation_topic)?;
        validate_non_empty_string("research_area", &self.research_area)?;
        Ok(())
    }
}
