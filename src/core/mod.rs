pub mod registry;
pub mod summary;

pub use crate::domain::clock::{Clock, FixedClock, SystemClock};
pub use crate::domain::model::{StudentIdentity, StudentKind};
pub use crate::domain::ports::Student;
pub use crate::domain::record::StudentRecord;
pub use crate::utils::error::Result;
