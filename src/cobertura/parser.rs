//! Cobertura report loading and decoding - the I/O boundary.
//!
//! [`load_report`] reads the file, [`parse_report`] turns raw bytes into a
//! [`CoverageReport`]. The two steps fail differently: a read failure is
//! fatal to the caller, a decode failure is reported and tolerated.

use super::types::CoverageReport;
use crate::errors::{ConvertError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::Path;

const ROOT_ELEMENT: &str = "coverage";

/// Read the whole report into memory.
///
/// # Errors
///
/// Returns [`ConvertError::Read`] if the file cannot be opened or read.
pub fn load_report(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| ConvertError::read(path, e))?;
    log::debug!("Loaded {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Decode a Cobertura XML document.
///
/// Missing attributes and wrapper elements decode to zero values; unknown
/// ones are skipped. The whole document decodes or none of it does.
///
/// # Errors
///
/// Returns [`ConvertError::UnexpectedRoot`] when the root element is not
/// `<coverage>`, and [`ConvertError::Parse`] for malformed XML or attribute
/// values that do not fit their field type.
pub fn parse_report(bytes: &[u8]) -> Result<CoverageReport> {
    if let Some(found) = root_element_name(bytes) {
        if found != ROOT_ELEMENT {
            return Err(ConvertError::UnexpectedRoot { found });
        }
    }

    let report: CoverageReport = quick_xml::de::from_reader(bytes)?;
    log::debug!(
        "Parsed coverage report: {} packages, {} class lines",
        report.packages().len(),
        report.class_line_count()
    );
    Ok(report)
}

/// Local name of the first element in the document.
///
/// Returns `None` when there is no element or the prolog is itself broken;
/// the deserializer then reports the real problem.
fn root_element_name(bytes: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
        buf.clear();
    }
}
