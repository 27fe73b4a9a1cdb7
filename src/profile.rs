//! Coverage profile output.
//!
//! A profile is plain text, one record per covered source line:
//!
//! ```text
//! <filename>:<line>.0,<line>.50 1 <hits>
//! ```
//!
//! Each record is a synthetic single-line span from column 0 to column 50
//! holding one statement. Records follow report order (package, then class,
//! then line) with no sorting or merging, so a file that appears under
//! several classes is written once per class.

use crate::cobertura::{load_report, parse_report, CoverageReport, Line};
use crate::errors::Result;
use std::fmt;
use std::io::Write;
use std::path::Path;

const SPAN_START_COLUMN: u32 = 0;
const SPAN_END_COLUMN: u32 = 50;
const STATEMENTS_PER_LINE: u32 = 1;

/// One profile record, borrowed from the report it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLine<'a> {
    pub filename: &'a str,
    pub line: Line,
}

impl fmt::Display for ProfileLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}.{},{}.{} {} {}",
            self.filename,
            self.line.number,
            SPAN_START_COLUMN,
            self.line.number,
            SPAN_END_COLUMN,
            STATEMENTS_PER_LINE,
            self.line.hits
        )
    }
}

/// Walk class-level lines in report order.
///
/// Lines declared under `<methods>` are never visited.
pub fn profile_lines(report: &CoverageReport) -> impl Iterator<Item = ProfileLine<'_>> {
    report
        .packages()
        .iter()
        .flat_map(|package| package.classes())
        .flat_map(|class| {
            class.lines().iter().map(move |line| ProfileLine {
                filename: &class.filename,
                line: *line,
            })
        })
}

/// Flatten a report into formatted profile lines.
pub fn flatten(report: &CoverageReport) -> Vec<String> {
    profile_lines(report).map(|line| line.to_string()).collect()
}

/// Write each line followed by a newline, in order. Returns the number of
/// lines written.
pub fn emit<I, W>(lines: I, writer: &mut W) -> Result<usize>
where
    I: IntoIterator,
    I::Item: fmt::Display,
    W: Write,
{
    let mut count = 0;
    for line in lines {
        writeln!(writer, "{}", line)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Load, parse, flatten and emit the report at `path` into `writer`.
///
/// Nothing is written unless the whole report decodes.
pub fn convert_file<W: Write>(path: &Path, writer: &mut W) -> Result<usize> {
    let bytes = load_report(path)?;
    let report = parse_report(&bytes)?;
    let written = emit(profile_lines(&report), writer)?;
    log::info!("Wrote {} profile lines from {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cobertura::parse_report;
    use pretty_assertions::assert_eq;

    fn report(xml: &str) -> CoverageReport {
        parse_report(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_single_line_format() {
        let report = report(
            r#"<coverage><packages><package><classes>
                <class filename="foo.go"><lines><line number="5" hits="3"/></lines></class>
            </classes></package></packages></coverage>"#,
        );

        assert_eq!(flatten(&report), vec!["foo.go:5.0,5.50 1 3"]);
    }

    #[test]
    fn test_shared_filename_is_not_deduplicated() {
        let report = report(
            r#"<coverage><packages><package><classes>
                <class name="A" filename="bar.go"><lines><line number="1" hits="1"/></lines></class>
                <class name="B" filename="bar.go"><lines><line number="1" hits="4"/></lines></class>
            </classes></package></packages></coverage>"#,
        );

        assert_eq!(
            flatten(&report),
            vec!["bar.go:1.0,1.50 1 1", "bar.go:1.0,1.50 1 4"]
        );
    }

    #[test]
    fn test_document_order_across_packages() {
        let report = report(
            r#"<coverage><packages>
                <package name="z"><classes>
                    <class filename="z.go"><lines>
                        <line number="9" hits="0"/>
                        <line number="2" hits="1"/>
                    </lines></class>
                </classes></package>
                <package name="a"><classes>
                    <class filename="a.go"><lines><line number="1" hits="7"/></lines></class>
                </classes></package>
            </packages></coverage>"#,
        );

        assert_eq!(
            flatten(&report),
            vec![
                "z.go:9.0,9.50 1 0",
                "z.go:2.0,2.50 1 1",
                "a.go:1.0,1.50 1 7",
            ]
        );
    }

    #[test]
    fn test_class_without_lines_contributes_nothing() {
        let report = report(
            r#"<coverage><packages><package><classes>
                <class filename="empty.go"/>
                <class filename="empty2.go"><lines/></class>
                <class filename="full.go"><lines><line number="3" hits="2"/></lines></class>
            </classes></package></packages></coverage>"#,
        );

        assert_eq!(flatten(&report), vec!["full.go:3.0,3.50 1 2"]);
    }

    #[test]
    fn test_method_lines_are_never_emitted() {
        let report = report(
            r#"<coverage><packages><package><classes>
                <class filename="m.go">
                    <methods><method name="f">
                        <lines><line number="4" hits="1"/></lines>
                    </method></methods>
                </class>
            </classes></package></packages></coverage>"#,
        );

        assert!(flatten(&report).is_empty());
    }

    #[test]
    fn test_missing_attributes_format_as_zero() {
        let report = report(
            "<coverage><packages><package><classes><class><lines><line/></lines></class></classes></package></packages></coverage>",
        );

        assert_eq!(flatten(&report), vec![":0.0,0.50 1 0"]);
    }

    #[test]
    fn test_blank_hits_format_as_zero() {
        let report = report(
            r#"<coverage><packages><package><classes>
                <class filename="blank.go"><lines><line number=" 4 " hits=""/></lines></class>
            </classes></package></packages></coverage>"#,
        );

        assert_eq!(flatten(&report), vec!["blank.go:4.0,4.50 1 0"]);
    }

    #[test]
    fn test_large_hit_counts() {
        let report = report(
            r#"<coverage><packages><package><classes>
                <class filename="hot.go"><lines><line number="12" hits="9223372036854775807"/></lines></class>
            </classes></package></packages></coverage>"#,
        );

        assert_eq!(
            flatten(&report),
            vec!["hot.go:12.0,12.50 1 9223372036854775807"]
        );
    }

    #[test]
    fn test_emit_writes_one_line_per_item() {
        let mut out = Vec::new();
        let written = emit(["a:1.0,1.50 1 0", "b:2.0,2.50 1 1"], &mut out).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a:1.0,1.50 1 0\nb:2.0,2.50 1 1\n"
        );
    }

    #[test]
    fn test_emit_nothing() {
        let mut out = Vec::new();
        let written = emit(Vec::<String>::new(), &mut out).unwrap();

        assert_eq!(written, 0);
        assert!(out.is_empty());
    }
}
