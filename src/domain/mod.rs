// Domain layer: the student model and its ports. No I/O.

pub mod clock;
pub mod doctoral;
pub mod graduate;
pub mod model;
pub mod ports;
pub mod record;
pub mod undergraduate;
