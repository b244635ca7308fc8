//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments of the maze scenario generator.
///
/// This structure declares the whole surface of the binary: a single positional argument
/// naming the configuration file to read. A missing argument makes clap print its usage
/// message and exit with a non-zero status before any generation starts.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the maze configuration file.
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_config_path() {
        let cli = Cli::try_parse_from(["mazegen", "scenario.txt"])
            .expect("a single positional argument should parse");

        assert_eq!(cli.config, PathBuf::from("scenario.txt"));
    }

    #[test]
    fn test_cli_requires_config_path() {
        assert!(Cli::try_parse_from(["mazegen"]).is_err());
    }
}
