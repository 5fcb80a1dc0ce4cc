pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::RecordsConfig;

pub use crate::core::{
    registry::StudentRegistry, summary::RosterSummary, Clock, FixedClock, Student,
    StudentIdentity, StudentKind, StudentRecord, SystemClock,
};
pub use crate::domain::doctoral::DoctoralStudent;
pub use crate::domain::graduate::GraduateStudent;
pub use crate::domain::model::ClassStanding;
pub use crate::domain::undergraduate::UndergraduateStudent;
pub use crate::utils::error::{RecordsError, Result, ValidationError, ValidationResult};
