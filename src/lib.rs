// Export modules for library usage
pub mod cli;
pub mod cobertura;
pub mod errors;
pub mod profile;

// Re-export commonly used types
pub use crate::cobertura::{
    load_report, parse_report, Class, CoverageReport, Line, Method, Package,
};
pub use crate::errors::{ConvertError, Result};
pub use crate::profile::{convert_file, emit, flatten, profile_lines, ProfileLine};
