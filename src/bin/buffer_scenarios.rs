//! `buffer_scenarios` — run the built-in editing scenarios
//!
//! Runs every scenario in [`grapheme_buffers::harness::SCENARIOS`] against the
//! selected buffer strategies and prints one line per assertion.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin buffer_scenarios
//! cargo run --bin buffer_scenarios -- --strategy gap --initial-gap 8
//! cargo run --bin buffer_scenarios -- --strict --verbose
//! ```

use grapheme_buffers::harness::{Report, SCENARIOS};
use grapheme_buffers::{BoundsPolicy, BufferOptions, LogLevel, Strategy, set_log_callback};
use std::ffi::OsString;
use std::process::ExitCode;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "buffer_scenarios - run text buffer scenarios

USAGE:
    buffer_scenarios [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --strategy <NAME>       flat, array, gap, or all (default: all)
    --strict                Report out-of-range positions instead of clamping
    --initial-gap <N>       Free slots reserved by the gap buffer (default: 0)
    --verbose               Print clamping and gap growth logs to stderr
";

/// Configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub strategies: Vec<Strategy>,
    pub options: BufferOptions,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            options: BufferOptions::default(),
            verbose: false,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--strategy" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--strategy requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    if value == "all" {
                        config.strategies = Strategy::ALL.to_vec();
                    } else if let Some(strategy) = Strategy::from_name(&value) {
                        config.strategies = vec![strategy];
                    } else {
                        return ParseResult::Error(format!("Unknown strategy: {value}"));
                    }
                }

                "--strict" => config.options.bounds = BoundsPolicy::Strict,

                "--initial-gap" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--initial-gap requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match value.parse::<usize>() {
                        Ok(n) => config.options.initial_gap = n,
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --initial-gap value: {value}"
                            ));
                        }
                    }
                }

                "--verbose" => config.verbose = true,

                other => return ParseResult::Error(format!("Unknown argument: {other}")),
            }
        }

        ParseResult::Config(config)
    }
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(message) => {
            eprintln!("error: {message}\n\n{HELP_TEXT}");
            return ExitCode::from(2);
        }
    };

    if config.verbose {
        set_log_callback(|level, message| {
            let tag = match level {
                LogLevel::Debug => "debug",
                LogLevel::Info => "info",
                LogLevel::Warn => "warn",
                LogLevel::Error => "error",
            };
            eprintln!("[{tag}] {message}");
        });
    }

    let report = Report::run(SCENARIOS, &config.strategies, config.options);
    print!("{}", report.render());

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        eprintln!(
            "{} assertion(s) failed ({} bounds)",
            report.failures(),
            config.options.bounds.name()
        );
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParseResult {
        Config::from_args(
            std::iter::once("buffer_scenarios")
                .chain(args.iter().copied())
                .map(OsString::from),
        )
    }

    #[test]
    fn test_defaults() {
        let ParseResult::Config(config) = parse(&[]) else {
            panic!("expected config");
        };
        assert_eq!(config.strategies, Strategy::ALL.to_vec());
        assert_eq!(config.options, BufferOptions::default());
        assert!(!config.verbose);
    }

    #[test]
    fn test_full_flags() {
        let ParseResult::Config(config) =
            parse(&["--strategy", "gap", "--strict", "--initial-gap", "8", "--verbose"])
        else {
            panic!("expected config");
        };
        assert_eq!(config.strategies, vec![Strategy::Gap]);
        assert_eq!(config.options, BufferOptions::strict().with_initial_gap(8));
        assert!(config.verbose);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--strategy"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--strategy", "rope"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--initial-gap", "-1"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--bogus"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["-h"]), ParseResult::Help));
    }
}
