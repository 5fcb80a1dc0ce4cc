use crate::domain::clock::Clock;
use crate::utils::error::{Result, ValidationResult};
use crate::utils::validation::{validate_email, validate_non_empty_string, Validate};
use std::fmt;

/// Identity fields shared by every kind of student.
///
/// Construction stores the given values as-is; the field rules are only
/// enforced by the setters (and by [`Validate`] when a caller asks).
#[derive(Debug, Clone, PartialEq)]
pub struct StudentIdentity {
    student_id: String,
    full_name: String,
    email: String,
    department: String,
    enrollment_year: i32,
}

impl StudentIdentity {
    pub fn new(
        student_id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        enrollment_year: i32,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
            enrollment_year,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn enrollment_year(&self) -> i32 {
        self.enrollment_year
    }

    pub fn set_full_name(&mut self, full_name: &str) -> ValidationResult<()> {
        validate_non_empty_string("full_name", full_name)
            .inspect_err(|e| self.log_rejection(e))?;
        self.full_name = full_name.to_string();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> ValidationResult<()> {
        validate_email("email", email).inspect_err(|e| self.log_rejection(e))?;
        self.email = email.to_string();
        Ok(())
    }

    pub fn set_department(&mut self, department: &str) -> ValidationResult<()> {
        validate_non_empty_string("department", department)
            .inspect_err(|e| self.log_rejection(e))?;
        self.department = department.to_string();
        Ok(())
    }

    /// Widened to `i64` so any pair of `i32` years subtracts without overflow.
    pub fn years_enrolled(&self, clock: &dyn Clock) -> i64 {
        i64::from(clock.current_year()) - i64::from(self.enrollment_year)
    }

    pub(crate) fn log_rejection(&self, error: &crate::utils::error::ValidationError) {
        tracing::debug!(
            student_id = %self.student_id,
            field = %error.field,
            "Rejected update: {}",
            error.reason
        );
    }
}

impl fmt::Display for StudentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {}\nName: {}\nEmail: {}\nDepartment: {}\nEnrollment Year: {}",
            self.student_id, self.full_name, self.email, self.department, self.enrollment_year
        )
    }
}

impl Validate for StudentIdentity {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("full_name", &self.full_name)?;
        validate_email("email", &self.email)?;
        validate_non_empty_string("department", &self.department)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudentKind {
    Undergraduate,
    Graduate,
    Doctoral,
}

impl StudentKind {
    pub const ALL: [StudentKind; 3] = [
        StudentKind::Undergraduate,
        StudentKind::Graduate,
        StudentKind::Doctoral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudentKind::Undergraduate => "Undergraduate",
            StudentKind::Graduate => "Graduate (Master's)",
            StudentKind::Doctoral => "Doctoral (PhD)",
        }
    }
}

impl fmt::Display for StudentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Class standing of an undergraduate, derived from the academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassStanding {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Unknown,
}

impl ClassStanding {
    pub fn from_academic_year(year: u8) -> Self {
        match year {
            1 => ClassStanding::Freshman,
            2 => ClassStanding::Sophomore,
            3 => ClassStanding::Junior,
            4 => ClassStanding::Senior,
            _ => ClassStanding::Unknown,
        }
    }
}

impl fmt::Display for ClassStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClassStanding::Freshman => "Freshman",
            ClassStanding::Sophomore => "Sophomore",
            ClassStanding::Junior => "Junior",
            ClassStanding::Senior => "Senior",
            ClassStanding::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
