use crate::domain::clock::Clock;
use crate::domain::doctoral::DoctoralStudent;
use crate::domain::graduate::GraduateStudent;
use crate::domain::model::{StudentIdentity, StudentKind};
use crate::domain::ports::Student;
use crate::domain::undergraduate::UndergraduateStudent;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Closed set of student kinds, dispatched by exhaustive match.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentRecord {
    Undergraduate(UndergraduateStudent),
    Graduate(GraduateStudent),
    Doctoral(DoctoralStudent),
}

impl StudentRecord {
    fn as_student(&self) -> &dyn Student {
        match self {
            StudentRecord::Undergraduate(s) => s,
            StudentRecord::Graduate(s) => s,
            StudentRecord::Doctoral(s) => s,
        }
    }

    fn as_student_mut(&mut self) -> &mut dyn Student {
        match self {
            StudentRecord::Undergraduate(s) => s,
            StudentRecord::Graduate(s) => s,
            StudentRecord::Doctoral(s) => s,
        }
    }

    pub fn as_undergraduate(&self) -> Option<&UndergraduateStudent> {
        match self {
            StudentRecord::Undergraduate(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_undergraduate_mut(&mut self) -> Option<&mut UndergraduateStudent> {
        match self {
            StudentRecord::Undergraduate(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_graduate(&self) -> Option<&GraduateStudent> {
        match self {
            StudentRecord::Graduate(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_graduate_mut(&mut self) -> Option<&mut GraduateStudent> {
        match self {
            StudentRecord::Graduate(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_doctoral(&self) -> Option<&DoctoralStudent> {
        match self {
            StudentRecord::Doctoral(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_doctoral_mut(&mut self) -> Option<&mut DoctoralStudent> {
        match self {
            StudentRecord::Doctoral(s) => Some(s),
            _ => None,
        }
    }
}

impl Student for StudentRecord {
    fn identity(&self) -> &StudentIdentity {
        self.as_student().identity()
    }

    fn identity_mut(&mut self) -> &mut StudentIdentity {
        self.as_student_mut().identity_mut()
    }

    fn kind(&self) -> StudentKind {
        self.as_student().kind()
    }

    fn student_status_at(&self, clock: &dyn Clock) -> String {
        self.as_student().student_status_at(clock)
    }

    fn display_info_at(&self, clock: &dyn Clock) -> String {
        self.as_student().display_info_at(clock)
    }
}

impl Validate for StudentRecord {
    fn validate(&self) -> Result<()> {
        match self {
            StudentRecord::Undergraduate(s) => s.validate(),
            StudentRecord::Graduate(s) => s.validate(),
            StudentRecord::Doctoral(s) => s.validate(),
        }
    }
}

impl From<UndergraduateStudent> for StudentRecord {
    fn from(student: UndergraduateStudent) -> Self {
        StudentRecord::Undergraduate(student)
    }
}

impl From<GraduateStudent> for StudentRecord {
    fn from(student: GraduateStudent) -> Self {
        StudentRecord::Graduate(student)
    }
}

impl From<DoctoralStudent> for StudentRecord {
    fn from(student: DoctoralStudent) -> Self {
        StudentRecord::Doctoral(student)
    }
}
