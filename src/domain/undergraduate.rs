use crate::domain::clock::Clock;
use crate::domain::model::{ClassStanding, StudentIdentity, StudentKind};
use crate::domain::ports::Student;
use crate::utils::error::{Result, ValidationResult};
use crate::utils::validation::{validate_range, validate_small_range, Validate};

pub const ACADEMIC_YEAR_MIN: u8 = 1;
pub const ACADEMIC_YEAR_MAX: u8 = 4;
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct UndergraduateStudent {
    identity: StudentIdentity,
    academic_year: u8,
    gpa: f64,
}

impl UndergraduateStudent {
    pub fn new(identity: StudentIdentity, academic_year: u8, gpa: f64) -> Self {
        Self {
            identity,
            academic_year,
            gpa,
        }
    }

    pub fn academic_year(&self) -> u8 {
        self.academic_year
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn class_standing(&self) -> ClassStanding {
        ClassStanding::from_academic_year(self.academic_year)
    }

    pub fn set_academic_year(&mut self, year: i64) -> ValidationResult<()> {
        let year =
            validate_small_range("academic_year", year, ACADEMIC_YEAR_MIN, ACADEMIC_YEAR_MAX)
                .inspect_err(|e| self.identity.log_rejection(e))?;
        self.academic_year = year;
        Ok(())
    }

    pub fn set_gpa(&mut self, gpa: f64) -> ValidationResult<()> {
        validate_range("gpa", gpa, GPA_MIN, GPA_MAX)
            .inspect_err(|e| self.identity.log_rejection(e))?;
        self.gpa = gpa;
        Ok(())
    }
}

impl Student for UndergraduateStudent {
    fn identity(&self) -> &StudentIdentity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut StudentIdentity {
        &mut self.identity
    }

    fn kind(&self) -> StudentKind {
        StudentKind::Undergraduate
    }

    fn student_status_at(&self, _clock: &dyn Clock) -> String {
        format!("{} - GPA: {:.2}", self.class_standing(), self.gpa)
    }

    fn display_info_at(&self, clock: &dyn Clock) -> String {
        format!(
            "{}\n--- Undergraduate Student ---\nAcademic Year: {}\nGPA: {:.2}\nStatus: {}",
            self.identity,
            self.academic_year,
            self.gpa,
            self.student_status_at(clock)
        )
    }
}

impl Validate for UndergraduateStudent {
    fn validate(&self) -> Result<()> {
        self.identity.validate()?;
        validate_range(
            "academic_year",
            self.academic_year,
            ACADEMIC_YEAR_MIN,
            ACADEMIC_YEAR_MAX,
        )?;
        validate_range("gpa", self.gpa, GPA_MIN, GPA_MAX)?;
        Ok(())
    }
}
