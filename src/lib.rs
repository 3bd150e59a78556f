//! Statistics over Dark Forces levels, read from a level's `.lev` geometry file and its `.inf`
//! and `.o` companions.

pub mod error;
pub mod level;
pub mod number;
pub mod report;
pub mod source;
pub mod stats;

pub use error::{Error, FormatError, FormatErrorKind, Result};
pub use level::{CompanionPolicy, Level};
pub use report::ReportFormat;
pub use source::{FileKind, LevelPaths};
pub use stats::{Metric, MetricKind, Statistics, Value};
