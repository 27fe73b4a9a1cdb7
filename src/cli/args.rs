use clap::Parser;
use std::path::PathBuf;

/// Default report path, relative to the working directory
pub const DEFAULT_REPORT: &str = "coverage.xml";

#[derive(Parser, Debug)]
#[command(name = "cobertura2profile")]
#[command(about = "Convert a Cobertura XML coverage report into a coverage profile", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Coverage xml report
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REPORT)]
    pub filename: PathBuf,
}

/// Resolved settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub report_path: PathBuf,
}

impl From<Cli> for ConvertConfig {
    fn from(cli: Cli) -> Self {
        Self {
            report_path: cli.filename,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_defaults_to_coverage_xml() {
        let cli = Cli::try_parse_from(["cobertura2profile"]).unwrap();
        assert_eq!(cli.filename, PathBuf::from("coverage.xml"));
    }

    #[test]
    fn test_filename_flag() {
        let cli = Cli::try_parse_from(["cobertura2profile", "--filename", "out/cov.xml"]).unwrap();
        assert_eq!(
            ConvertConfig::from(cli).report_path,
            PathBuf::from("out/cov.xml")
        );

        let cli = Cli::try_parse_from(["cobertura2profile", "--filename=cov.xml"]).unwrap();
        assert_eq!(cli.filename, PathBuf::from("cov.xml"));
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["cobertura2profile", "cov.xml"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
