//! Cobertura XML coverage reports.
//!
//! - [`types`] - the report tree (pure data)
//! - [`parser`] - reading and decoding report files (I/O boundary)
//!
//! ```ignore
//! use std::path::Path;
//! use cobertura2profile::cobertura::{load_report, parse_report};
//!
//! let bytes = load_report(Path::new("coverage.xml"))?;
//! let report = parse_report(&bytes)?;
//! println!("{} packages", report.packages().len());
//! ```

pub mod parser;
pub mod types;

pub use parser::{load_report, parse_report};
pub use types::{Class, CoverageReport, Line, Method, Package};
