use crate::domain::clock::{Clock, SystemClock};
use crate::domain::model::{StudentIdentity, StudentKind};
use crate::utils::error::ValidationResult;

/// Contract every kind of student fulfils.
///
/// Implementors supply the identity, the kind and the status line. The
/// accessors, validated identity setters and the default summary come for
/// free; variants override [`Student::display_info_at`] to append their own
/// detail.
pub trait Student {
    fn identity(&self) -> &StudentIdentity;

    fn identity_mut(&mut self) -> &mut StudentIdentity;

    fn kind(&self) -> StudentKind;

    fn student_status_at(&self, clock: &dyn Clock) -> String;

    fn display_info_at(&self, _clock: &dyn Clock) -> String {
        self.identity().to_string()
    }

    fn student_status(&self) -> String {
        self.student_status_at(&SystemClock)
    }

    fn display_info(&self) -> String {
        self.display_info_at(&SystemClock)
    }

    fn student_id(&self) -> &str {
        self.identity().student_id()
    }

    fn full_name(&self) -> &str {
        self.identity().full_name()
    }

    fn email(&self) -> &str {
        self.identity().email()
    }

    fn department(&self) -> &str {
        self.identity().department()
    }

    fn enrollment_year(&self) -> i32 {
        self.identity().enrollment_year()
    }

    fn set_full_name(&mut self, full_name: &str) -> ValidationResult<()> {
        self.identity_mut().set_full_name(full_name)
    }

    fn set_email(&mut self, email: &str) -> ValidationResult<()> {
        self.identity_mut().set_email(email)
    }

    fn set_department(&mut self, department: &str) -> ValidationResult<()> {
        self.identity_mut().set_department(department)
    }

    fn years_enrolled_at(&self, clock: &dyn Clock) -> i64 {
        self.identity().years_enrolled(clock)
    }

    fn years_enrolled(&self) -> i64 {
        self.years_enrolled_at(&SystemClock)
    }
}
