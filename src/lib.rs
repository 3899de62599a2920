pub mod config;
pub mod dataset;
pub mod directory;
pub mod error;
pub mod report;
pub mod stats;

pub use dataset::EnrollmentGrid;
pub use directory::{SchoolDirectory, SchoolEntry};
pub use error::QueryError;
