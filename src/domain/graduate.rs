use crate::domain::clock::Clock;
use crate::domain::model::{StudentIdentity, StudentKind};
use crate::domain::ports::Student;
use crate::utils::error::{Result, ValidationResult};
use crate::utils::validation::{validate_non_empty_string, Validate};

/// A Master's student working on a thesis under an advisor.
#[derive(Debug, Clone, PartialEq)]
pub struct GraduateStudent {
    identity: StudentIdentity,
    thesis_title: String,
    advisor_name: String,
}

impl GraduateStudent {
    pub fn new(
        identity: StudentIdentity,
        thesis_title: impl Into<String>,
        advisor_name: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            thesis_title: thesis_title.into(),
            advisor_name: advisor_name.into(),
        }
    }

    pub fn thesis_title(&self) -> &str {
        &self.thesis_title
    }

    pub fn advisor_name(&self) -> &str {
        &self.advisor_name
    }

    pub fn set_thesis_title(&mut self, title: &str) -> ValidationResult<()> {
        validate_non_empty_string("thesis_title", title)
            .inspect_err(|e| self.identity.log_rejection(e))?;
        self.thesis_title = title.to_string();
        Ok(())
    }

    pub fn set_advisor_name(&mut self, name: &str) -> ValidationResult<()> {
        validate_non_empty_string("advisor_name", name)
            .inspect_err(|e| self.identity.log_rejection(e))?;
        self.advisor_name = name.to_string();
        Ok(())
    }
}

impl Student for GraduateStudent {
    fn identity(&self) -> &StudentIdentity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut StudentIdentity {
        &mut self.identity
    }

    fn kind(&self) -> StudentKind {
        StudentKind::Graduate
    }

    fn student_status_at(&self, clock: &dyn Clock) -> String {
        format!(
            "Master's Student - {} years enrolled - Advisor: {}",
            self.years_enrolled_at(clock),
            self.advisor_name
        )
    }

    fn display_info_at(&self, clock: &dyn Clock) -> String {
        format!(
            "{}\n--- Graduate Student (Master's) ---\nThesis Title: {}\nAdvisor: {}\nStatus: {}",
            self.identity,
            self.thesis_title,
            self.advisor_name,
            self.student_status_at(clock)
        )
    }
}

impl Validate for GraduateStudent {
    fn validate(&self) -> Result<()> {
        self.identity.validate()?;
        validate_non_empty_string("thesis_title", &self.thesis_title)?;
        validate_non_empty_string("advisor_name", &self.advisor_name)?;
        Ok(())
    }
}
