#![forbid(unsafe_code)]

pub mod bbox;
pub mod cloud;
pub mod error;
pub mod labeled;
pub mod pose;
pub mod random;

pub use bbox::Aabb;
pub use cloud::PointCloud;
pub use error::{Error, Result};
pub use labeled::{ClassId, LabeledCloud};
pub use pose::{Heading, Pose, Position};
pub use random::{seeded, RandomSource};
