//! Command-line configuration.
//!
//! Parsed by a small hand-rolled loop over `std::env::args()` rather than a
//! flags crate: the entire surface is one positional argument and one
//! optional `-o`, which doesn't earn a `clap` dependency.

use std::path::PathBuf;

use crate::error::DriverError;

/// Resolved configuration for a single compile invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// The single positional input file.
    pub input: PathBuf,
    /// Output executable path, default `./a.out`.
    pub output: PathBuf,
    /// Set when `INFO` is present in the environment.
    pub info: bool,
    /// Set when `SILENT` is present in the environment.
    pub silent: bool,
}

impl Config {
    /// Parses `args` (excluding argv[0]) into a `Config`, reading `INFO`
    /// and `SILENT` from the process environment.
    pub fn parse(args: impl Iterator<Item = String>) -> Result<Self, DriverError> {
        let mut input = None;
        let mut output = None;
        let mut args = args.peekable();

        while let Some(arg) = args.next() {
            if arg == "-o" {
                let path = args.next().ok_or(DriverError::MissingOutputValue)?;
                output = Some(PathBuf::from(path));
            } else if let Some(value) = arg.strip_prefix("-o=") {
                output = Some(PathBuf::from(value));
            } else if arg.starts_with('-') {
                // Unknown flags are ignored per the external-interfaces
                // contract; they are not rejected.
                continue;
            } else if input.is_none() {
                input = Some(PathBuf::from(arg));
            } else {
                return Err(DriverError::ExtraArgument(arg));
            }
        }

        let input = input.ok_or(DriverError::MissingInput)?;

        Ok(Self {
            input,
            output: output.unwrap_or_else(|| PathBuf::from("./a.out")),
            info: std::env::var_os("INFO").is_some(),
            silent: std::env::var_os("SILENT").is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> impl Iterator<Item = String> + '_ {
        v.iter().map(|s| s.to_string())
    }

    #[test]
    fn parses_bare_input() {
        let config = Config::parse(args(&["main.iron"])).unwrap();
        assert_eq!(config.input, PathBuf::from("main.iron"));
        assert_eq!(config.output, PathBuf::from("./a.out"));
    }

    #[test]
    fn parses_output_flag() {
        let config = Config::parse(args(&["main.iron", "-o", "prog"])).unwrap();
        assert_eq!(config.output, PathBuf::from("prog"));
    }

    #[test]
    fn rejects_missing_input() {
        assert!(matches!(
            Config::parse(args(&["-o", "prog"])),
            Err(DriverError::MissingInput)
        ));
    }

    #[test]
    fn rejects_extra_positional_argument() {
        assert!(matches!(
            Config::parse(args(&["a.iron", "b.iron"])),
            Err(DriverError::ExtraArgument(_))
        ));
    }

    #[test]
    fn ignores_unknown_flags() {
        let config = Config::parse(args(&["--weird", "main.iron"])).unwrap();
        assert_eq!(config.input, PathBuf::from("main.iron"));
    }
}
